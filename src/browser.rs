//! Browser collaborators: connectivity, service worker, install prompt

/// `navigator.onLine`; assumed online outside the browser
pub fn is_online() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Whether the page can draw the history chart
pub fn charts_supported() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &"SVGElement".into()).unwrap_or(false))
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Call `on_change(online)` on every `online`/`offline` event
#[cfg(target_arch = "wasm32")]
pub fn watch_connectivity(on_change: impl Fn(bool) + 'static) {
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let on_change = Rc::new(on_change);

    for (event, online) in [("online", true), ("offline", false)] {
        let callback = on_change.clone();
        let closure = Closure::<dyn Fn()>::new(move || callback(online));
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("Failed to listen for {} events: {:?}", event, e);
        }
        // Listeners live as long as the page
        closure.forget();
    }
}

/// Log PWA install events
#[cfg(target_arch = "wasm32")]
pub fn watch_install_prompt() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };

    let events: [(&str, &str); 2] = [
        ("beforeinstallprompt", "App install prompt available"),
        ("appinstalled", "App installed"),
    ];
    for (event, message) in events {
        let closure = Closure::<dyn Fn()>::new(move || log::info!("{}", message));
        if let Err(e) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to listen for {}: {:?}", event, e);
        }
        closure.forget();
    }
}

/// Register the service worker; the outcome is only logged
#[cfg(target_arch = "wasm32")]
pub fn register_service_worker(path: &str) {
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    if !js_sys::Reflect::has(&window.navigator(), &"serviceWorker".into()).unwrap_or(false) {
        log::info!("Service workers not supported");
        return;
    }

    let promise = window.navigator().service_worker().register(path);
    let path = path.to_string();
    leptos::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("Service worker registered: {}", path),
            Err(e) => log::warn!("Service worker registration failed: {:?}", e),
        }
    });
}
