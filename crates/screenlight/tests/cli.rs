use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_screenlight"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute screenlight");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("light panel"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_screenlight"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute screenlight");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("screenlight"));
}

#[test]
fn unknown_flag_is_rejected() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_screenlight"));
    cmd.arg("--brightness=10");

    // Act
    let output = cmd.output().expect("failed to execute screenlight");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--brightness"));
}
