use crate::host::{TickClosure, WebHost};
use crate::surface::CanvasSurface;
use backdrop_core::{Backdrop, BackdropOptions, EnvironmentCapabilities};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;

/// One mounted backdrop and the host resources it holds.
pub struct Session {
    pub backdrop: Backdrop<CanvasSurface, WebHost>,
    pub host: WebHost,
}

impl Session {
    /// Mount and start the animation frame loop. The tick callback only
    /// holds a weak reference, so dropping the session stops the loop.
    pub fn start(
        surface: Option<CanvasSurface>,
        mut host: WebHost,
        options: &BackdropOptions,
        caps: &EnvironmentCapabilities,
    ) -> Rc<RefCell<Session>> {
        Rc::new_cyclic(|weak: &Weak<RefCell<Session>>| {
            host.set_tick(tick_closure(weak.clone()));
            let backdrop = Backdrop::mount(surface, &mut host, options, caps);
            if !backdrop.is_running() {
                host.release_tick();
            }
            RefCell::new(Session { backdrop, host })
        })
    }

    pub fn frame(&mut self, now_ms: f64) {
        let Session { backdrop, host } = self;
        for event in host.take_events() {
            backdrop.handle_event(event);
        }
        backdrop.on_frame(now_ms, host);
    }

    /// Stop the loop and release every listener. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let Session { backdrop, host } = self;
        backdrop.unmount(host);
        host.release_tick();
    }
}

fn tick_closure(session: Weak<RefCell<Session>>) -> TickClosure {
    Closure::wrap(Box::new(move |now_ms: f64| {
        let Some(session) = session.upgrade() else {
            return;
        };
        match session.try_borrow_mut() {
            Ok(mut s) => s.frame(now_ms),
            Err(_) => log::warn!("[frame] session busy; skipping tick"),
        };
    }) as Box<dyn FnMut(f64)>)
}
