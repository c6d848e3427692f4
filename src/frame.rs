use crate::anim::{layout_frame, ReactionStore};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub store: Rc<RefCell<ReactionStore>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    /// Cleared on teardown; the loop stops rescheduling itself.
    pub running: Rc<Cell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let css_size = dom::canvas_css_size(&self.canvas);
        if let Err(e) = render::begin_frame(&self.ctx, css_size, dom::device_pixel_ratio()) {
            log::error!("frame setup error: {:?}", e);
            return;
        }

        let mut store = self.store.borrow_mut();
        let layout = layout_frame(store.snapshot(), now, css_size);
        if let Err(e) = render::draw_sprites(&self.ctx, &layout.sprites) {
            log::error!("render error: {:?}", e);
        }
        let expired = layout.expired;
        drop(layout);

        // one batch removal per frame, with the same clock reading used for layout
        if expired > 0 {
            let removed = store.evict_expired(now);
            log::debug!("[frame] evicted {} live={}", removed, store.len());
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
