// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::{Arc, Mutex};

use super::{ChangeHookDispatcher, HookRegistry, SWITCH_EVENT, SwitchEvent};

#[test]
fn test_hooks_run_in_registration_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let hooks = HookRegistry::new();

    for name in ["search", "mail"] {
        let calls = Arc::clone(&calls);
        hooks.register(name, move |event: &SwitchEvent| {
            calls
                .lock()
                .unwrap()
                .push(format!("{name}:{}", event.target));
        });
    }

    hooks.dispatch(&SwitchEvent::new("prod", Some("dev".to_string())));

    assert_eq!(*calls.lock().unwrap(), ["search:prod", "mail:prod"]);
    assert_eq!(hooks.listener_names(), ["search", "mail"]);
}

#[test]
fn test_switch_event_name() {
    let event = SwitchEvent::new("stage", None);
    assert_eq!(event.name, SWITCH_EVENT);
    assert_eq!(event.previous, None);
}

#[test]
fn test_dispatch_without_listeners() {
    HookRegistry::new().dispatch(&SwitchEvent::new("dev", None));
}

#[test]
fn test_listener_may_register_during_dispatch() {
    let hooks = Arc::new(HookRegistry::new());
    let calls = Arc::new(Mutex::new(Vec::new()));

    let registry = Arc::clone(&hooks);
    let late_calls = Arc::clone(&calls);
    hooks.register("installer", move |_event: &SwitchEvent| {
        let late_calls = Arc::clone(&late_calls);
        registry.register("late", move |event: &SwitchEvent| {
            late_calls.lock().unwrap().push(event.target.clone());
        });
    });

    let (done_tx, done_rx) = std::sync::mpsc::channel();
    let worker_hooks = Arc::clone(&hooks);
    std::thread::spawn(move || {
        worker_hooks.dispatch(&SwitchEvent::new("stage", None));
        done_tx.send(()).unwrap();
    });
    done_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .expect("dispatch did not return");

    assert_eq!(hooks.listener_names(), ["installer", "late"]);
    assert!(calls.lock().unwrap().is_empty());

    hooks.dispatch(&SwitchEvent::new("prod", None));
    assert_eq!(*calls.lock().unwrap(), ["prod"]);
}
