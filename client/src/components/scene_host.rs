//! Host for the decorative blockchain scene on the home page.
//!
//! ARCHITECTURE
//! ============
//! The scene crate owns drawing. This host mounts it once the container div
//! exists, drives it from `requestAnimationFrame`, and tears it down when the
//! component is disposed. Cleanup only flips an atomic flag (cleanup hooks
//! must be `Send`); the next animation frame sees the flag, unmounts the
//! scene and stops rescheduling.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use vault_scene::engine::Scene;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
type SceneSlot = Rc<RefCell<Option<Scene>>>;

#[cfg(feature = "hydrate")]
fn stop(scene: &SceneSlot) {
    if let Some(mounted) = scene.borrow_mut().take() {
        mounted.unmount();
        log::debug!("scene unmounted");
    }
}

#[cfg(feature = "hydrate")]
fn schedule_frame(scene: SceneSlot, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        stop(&scene);
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let scene_for_cb = Rc::clone(&scene);
    let alive_for_cb = Arc::clone(&alive);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        holder_for_cb.borrow_mut().take();
        if !alive_for_cb.load(Ordering::Relaxed) {
            stop(&scene_for_cb);
            return;
        }
        let drawn = match scene_for_cb.borrow_mut().as_mut() {
            Some(mounted) => mounted.frame(ts),
            None => return,
        };
        if let Err(err) = drawn {
            log::warn!("scene frame failed: {err:?}");
            stop(&scene_for_cb);
            return;
        }
        schedule_frame(Rc::clone(&scene_for_cb), Arc::clone(&alive_for_cb));
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(err) => {
            log::warn!("requestAnimationFrame failed: {err:?}");
            stop(&scene);
        }
    }
}

/// Full-bleed container the scene canvas is appended to.
#[component]
pub fn SceneHost() -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let scene: SceneSlot = Rc::new(RefCell::new(None));
        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_cleanup = Arc::clone(&alive);
        on_cleanup(move || alive_for_cleanup.store(false, Ordering::Relaxed));

        Effect::new(move || {
            let Some(container) = container_ref.get() else {
                return;
            };
            if scene.borrow().is_some() || !alive.load(Ordering::Relaxed) {
                return;
            }
            let seed = js_sys::Date::now().to_bits();
            match Scene::mount(&container, seed) {
                Ok(mounted) => {
                    *scene.borrow_mut() = Some(mounted);
                    schedule_frame(Rc::clone(&scene), Arc::clone(&alive));
                }
                Err(err) => log::warn!("scene mount failed: {err:?}"),
            }
        });
    }

    view! { <div class="scene-host" node_ref=container_ref aria-hidden="true"></div> }
}
