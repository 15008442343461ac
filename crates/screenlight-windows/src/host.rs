//! The light panel window and its message loop.
//!
//! All window state lives in a thread-local [`Session`] owned by the
//! dispatch thread that created the window. The window procedure
//! translates raw messages into [`LightEvent`]s and never holds a borrow
//! of the session across calls that can re-enter it (`DestroyWindow`
//! sends `WM_DESTROY` synchronously, `UpdateWindow` sends `WM_PAINT`).

use std::cell::RefCell;
use std::ffi::c_void;

use screenlight_core::{
    LightEvent, LightResult, Outcome, PowerGuard, ScreenSize, Session, ShutdownCoordinator,
    ShutdownSignal, log_error, log_info, log_warn,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{BeginPaint, EndPaint, FillRect, PAINTSTRUCT, UpdateWindow};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
    GetMessageW, GetSystemMetrics, IDC_ARROW, KillTimer, LoadCursorW, MB_ICONERROR, MB_OK, MSG,
    MessageBoxW, PostMessageW, PostQuitMessage, RegisterClassExW, SM_CXSCREEN, SM_CYSCREEN,
    SW_SHOW, SetTimer, ShowWindow, TranslateMessage, WINDOW_EX_STYLE, WM_APP, WM_CLOSE,
    WM_DESTROY, WM_ERASEBKGND, WM_KEYDOWN, WM_PAINT, WM_TIMER, WNDCLASSEXW, WS_POPUP,
};
use windows::core::{HSTRING, w};

use crate::brush::GdiSurface;
use crate::cursor::SystemCursor;
use crate::power::ExecutionState;
use crate::{ctrl_c, keys};

/// Exit code for a failed startup.
pub const EXIT_FAILURE: i32 = 1;

/// Posted by the signal thread to request a graceful shutdown.
const WM_APP_SHUTDOWN: u32 = WM_APP + 1;

/// Identifier of the animation timer.
const ANIMATION_TIMER: usize = 1;

type LightSession = Session<GdiSurface, SystemCursor>;

thread_local! {
    static SESSION: RefCell<Option<LightSession>> = const { RefCell::new(None) };
}

/// Host settings derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct HostOptions {
    /// Whether the cursor starts out animated.
    pub animate: bool,
    /// Animation timer period in milliseconds.
    pub tick_ms: u32,
}

/// Runs the light panel until it is closed. Returns the process exit code.
///
/// Sleep inhibition covers the whole call and is released on every path.
/// Startup failures are shown in a message box and yield [`EXIT_FAILURE`].
pub fn run(options: HostOptions) -> i32 {
    let _power = PowerGuard::acquire(ExecutionState);

    if let Err(e) = initialize(options) {
        log_error!("Startup failed: {e}");
        show_error(&e.to_string());
        return EXIT_FAILURE;
    }
    log_info!("Screen light started. Press ESC to stop the program.");

    let code = message_loop();

    SESSION.with(|cell| cell.borrow_mut().take());
    log_info!("Program terminated.");
    code
}

/// Registers the window class, creates and shows the window, and moves
/// the session to `Running`.
fn initialize(options: HostOptions) -> LightResult<()> {
    let class_name = w!("ScreenLightWindowClass");

    // SAFETY: all calls below are plain Win32 setup calls on the current
    // thread; the class name is a static wide string.
    let (hwnd, screen) = unsafe {
        let instance = GetModuleHandleW(None)?;
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        if RegisterClassExW(&wc) == 0 {
            return Err("Could not register window class.".into());
        }

        let width = GetSystemMetrics(SM_CXSCREEN);
        let height = GetSystemMetrics(SM_CYSCREEN);

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Screen Light"),
            WS_POPUP,
            0,
            0,
            width,
            height,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .map_err(|e| format!("Could not create window: {e}"))?;

        (hwnd, ScreenSize::new(width, height))
    };

    let signal = ShutdownSignal::new();
    let session = match Session::new(
        GdiSurface::new(hwnd),
        SystemCursor::new(),
        screen,
        options.animate,
        signal.clone(),
    ) {
        Ok(session) => session,
        Err(e) => {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
            return Err(format!("Could not create background brush: {e}").into());
        }
    };
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));

    install_shutdown_handler(hwnd, signal);

    // SAFETY: `hwnd` is our live window; the timer is killed in `tear_down`.
    if unsafe { SetTimer(Some(hwnd), ANIMATION_TIMER, options.tick_ms, None) } == 0 {
        log_warn!("Could not start the animation timer; mouse movement is unavailable");
    }

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }

    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.start();
        }
    });
    Ok(())
}

/// Wires console control signals to the window. Failure is non-fatal.
fn install_shutdown_handler(hwnd: HWND, signal: ShutdownSignal) {
    // HWND is not Send; the raw value is all the signal thread needs.
    let raw = hwnd.0 as isize;
    let coordinator = ShutdownCoordinator::new(signal, move || post_shutdown(raw));
    if let Err(e) = ctrl_c::install(coordinator) {
        log_warn!("Could not set console control handler: {e}");
    }
}

/// Runs on the signal thread. `PostMessageW` is safe to call from any thread.
fn post_shutdown(raw: isize) {
    let hwnd = HWND(raw as *mut c_void);
    // SAFETY: posting to a destroyed window fails harmlessly.
    if let Err(e) = unsafe { PostMessageW(Some(hwnd), WM_APP_SHUTDOWN, WPARAM(0), LPARAM(0)) } {
        log_warn!("Could not post shutdown message: {e}");
    }
}

/// Blocks on `GetMessageW` until `WM_QUIT`, returning its exit code.
fn message_loop() -> i32 {
    let mut msg = MSG::default();

    let code = loop {
        // SAFETY: `msg` is a valid out parameter for the current thread's queue.
        match unsafe { GetMessageW(&mut msg, None, 0, 0) }.0 {
            0 => break msg.wParam.0 as i32,
            -1 => {
                log_error!("GetMessageW failed");
                break EXIT_FAILURE;
            }
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    };

    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            session.finish();
        }
    });
    code
}

/// Feeds an event to the session. Returns `Unhandled` when there is no
/// session yet so the message falls through to `DefWindowProcW`.
fn dispatch(event: LightEvent) -> Outcome {
    SESSION.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => match slot.as_mut() {
            Some(session) => session.handle(event),
            None => Outcome::Unhandled,
        },
        Err(_) => Outcome::Handled,
    })
}

/// Stops the timer and destroys the window. The session has already
/// released its brush.
fn tear_down(hwnd: HWND) {
    unsafe {
        let _ = KillTimer(Some(hwnd), ANIMATION_TIMER);
        let _ = DestroyWindow(hwnd);
    }
}

/// Fills the invalid region with the live background brush.
fn paint(hwnd: HWND) {
    let brush = SESSION.with(|cell| {
        cell.try_borrow()
            .ok()
            .and_then(|slot| slot.as_ref().and_then(|s| s.background().map(|b| b.raw())))
    });

    let mut ps = PAINTSTRUCT::default();
    // SAFETY: BeginPaint/EndPaint are paired on the window being painted.
    unsafe {
        let hdc = BeginPaint(hwnd, &mut ps);
        if let Some(brush) = brush {
            let _ = FillRect(hdc, &ps.rcPaint, brush);
        }
        let _ = EndPaint(hwnd, &ps);
    }
}

fn show_error(message: &str) {
    // SAFETY: MessageBoxW with no owner window blocks until dismissed.
    unsafe {
        let _ = MessageBoxW(
            None,
            &HSTRING::from(message),
            w!("Startup Error"),
            MB_OK | MB_ICONERROR,
        );
    }
}

unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let event = match msg {
        WM_KEYDOWN => LightEvent::KeyDown {
            key: keys::key_from_vk(wparam.0 as u32),
            modifier: keys::shift_held(),
        },
        WM_TIMER if wparam.0 == ANIMATION_TIMER => LightEvent::TimerTick,
        WM_CLOSE => LightEvent::CloseRequested,
        WM_APP_SHUTDOWN => LightEvent::ShutdownRequested,
        WM_PAINT => {
            paint(hwnd);
            return LRESULT(0);
        }
        // The whole client area is filled in WM_PAINT.
        WM_ERASEBKGND => return LRESULT(1),
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            return LRESULT(0);
        }
        _ => return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    };

    match dispatch(event) {
        Outcome::Handled => LRESULT(0),
        Outcome::Unhandled => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        Outcome::Terminate => {
            tear_down(hwnd);
            LRESULT(0)
        }
    }
}
