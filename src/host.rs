use crate::events;
use crate::viewport::push_coalesced;
use backdrop_core::{EventKind, Host, HostEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickClosure = Closure<dyn FnMut(f64)>;

/// A registered DOM listener; removing it drops the closure.
pub struct WebListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Browser host: window/document listeners feed a small event queue that the
/// frame callback drains, and frames go through `requestAnimationFrame`.
pub struct WebHost {
    window: web::Window,
    document: web::Document,
    queue: Rc<RefCell<Vec<HostEvent>>>,
    tick: Option<TickClosure>,
}

impl WebHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            queue: Rc::new(RefCell::new(Vec::with_capacity(EventKind::ALL.len()))),
            tick: None,
        }
    }

    /// Install the callback every `request_frame` schedules.
    pub fn set_tick(&mut self, tick: TickClosure) {
        self.tick = Some(tick);
    }

    /// Drop the tick callback. Only call outside of it.
    pub fn release_tick(&mut self) {
        self.tick = None;
    }

    pub fn take_events(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

impl Host for WebHost {
    type Listener = WebListener;
    type Frame = i32;

    fn listen(&mut self, kind: EventKind) -> Option<WebListener> {
        let (event, target) = events::dom_binding(kind, &self.window, &self.document);
        let queue = self.queue.clone();
        let window = self.window.clone();
        let document = self.document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(host_event) = events::translate(kind, &ev, &window, &document) {
                push_coalesced(&mut queue.borrow_mut(), host_event);
            }
        }) as Box<dyn FnMut(web::Event)>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => Some(WebListener {
                target,
                event,
                closure,
            }),
            Err(e) => {
                log::warn!("[host] addEventListener({}) failed: {:?}", event, e);
                None
            }
        }
    }

    fn unlisten(&mut self, listener: WebListener) {
        _ = listener.target.remove_event_listener_with_callback(
            listener.event,
            listener.closure.as_ref().unchecked_ref(),
        );
    }

    fn request_frame(&mut self) -> Option<i32> {
        let tick = self.tick.as_ref()?;
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[host] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, frame: i32) {
        _ = self.window.cancel_animation_frame(frame);
    }
}
