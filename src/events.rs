use crate::anim::{append_if_live, Burst, BurstPlan, CancelToken, ReactionStore};
use crate::constants::{FINALE_BUTTON_ID, REACTION_BUTTONS};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One button per glyph; a tap appends a single reaction while the view is live.
pub fn wire_reaction_buttons(
    document: &web::Document,
    store: &Rc<RefCell<ReactionStore>>,
    cancel: &CancelToken,
) {
    for (id, symbol) in REACTION_BUTTONS {
        let store = store.clone();
        let cancel = cancel.clone();
        dom::add_click_listener(document, id, move || {
            if append_if_live(&mut store.borrow_mut(), &cancel, symbol) {
                log::debug!("[tap] {} live={}", symbol, store.borrow().len());
            }
        });
    }
}

/// Every click starts its own burst; all of them share the view's token.
pub fn wire_finale_button(
    document: &web::Document,
    store: &Rc<RefCell<ReactionStore>>,
    cancel: &CancelToken,
) {
    let store = store.clone();
    let cancel = cancel.clone();
    dom::add_click_listener(document, FINALE_BUTTON_ID, move || {
        spawn_burst(BurstPlan::FINALE, store.clone(), cancel.clone());
    });
}

pub fn spawn_burst(plan: BurstPlan, store: Rc<RefCell<ReactionStore>>, cancel: CancelToken) {
    spawn_local(async move {
        let mut burst = Burst::new(plan, cancel);
        let mut rng = StdRng::from_entropy();
        log::info!(
            "[finale] start {} x{}",
            burst.plan().symbol,
            burst.plan().count
        );
        while let Some(delay) = burst.next_delay(&mut rng) {
            if let Err(e) = sleep(delay).await {
                log::warn!("[finale] timer failed, stopping: {:?}", e);
                break;
            }
            // the view may have been torn down while we were waiting
            let Some(symbol) = burst.fire() else {
                break;
            };
            store.borrow_mut().append(symbol);
        }
        if burst.is_cancelled() {
            log::info!(
                "[finale] abandoned after {} appends ({} skipped)",
                burst.fired(),
                burst.remaining()
            );
        } else {
            log::info!("[finale] done ({} appends)", burst.fired());
        }
    });
}

async fn sleep(delay: Duration) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    scheduled.map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Tear the view down when the page is unloaded. A page kept in the
/// back/forward cache (`persisted`) stays live and resumes on return.
pub fn wire_pagehide(mut on_hide: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            log::info!("[page] hidden into back/forward cache, keeping view");
            return;
        }
        on_hide();
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
