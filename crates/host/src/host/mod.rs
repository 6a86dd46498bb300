//! Host component bridging the confirm service to caller-supplied renderers.

pub mod props;
pub mod slots;

mod handlers;

use crate::config::HostConfig;
use confirm_service::{ConfirmService, HandlerSet};
use contracts::ChoiceOption;
use handlers::{HostHandlers, HostSlots};
use leptos::prelude::*;
use std::sync::Arc;

pub use props::{AlertRenderProps, ChoiceRenderProps, ConfirmRenderProps};

/// Renders alerts, confirmations and choices requested through the service.
///
/// While mounted, the host registers its handler set with `service` (the
/// global one by default) and removes it on unmount. A host mounted inside
/// another one takes over until it unmounts. Descendants can reach the
/// service with [`use_confirm_service`].
#[component]
pub fn ConfirmComponentHost(
    /// Renders the alert slot.
    render_alert: Callback<AlertRenderProps, AnyView>,
    /// Renders the confirmation slot.
    render_confirm: Callback<ConfirmRenderProps, AnyView>,
    /// Renders the choice slot. Choices stay invisible without it.
    #[prop(optional)]
    render_choice: Option<Callback<ChoiceRenderProps, AnyView>>,
    /// Default captions and alert durations.
    #[prop(optional)]
    config: Option<HostConfig>,
    /// Service to register with (default: the global one).
    #[prop(optional)]
    service: Option<ConfirmService>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let service = service.unwrap_or_else(ConfirmService::global);
    let config = Arc::new(config.unwrap_or_default());
    let slots = HostSlots::new();

    let handlers: HandlerSet = Arc::new(HostHandlers::new(slots, config));
    service.add_handlers(handlers.clone());
    provide_context(service.clone());

    on_cleanup({
        let service = service.clone();
        move || service.remove_handlers(&handlers)
    });

    let on_alert_close = Callback::new(move |_| slots.hide_alert());
    let on_alert_expire = Callback::new(move |show_id: u64| slots.expire_alert(show_id));
    let on_confirm = Callback::new(move |_| slots.settle_confirm(true));
    let on_deny = Callback::new(move |_| slots.settle_confirm(false));
    let on_choice = Callback::new(move |option: ChoiceOption| slots.settle_choice(Some(option)));
    let on_choice_cancel = Callback::new(move |_| slots.settle_choice(None));

    let alert_view = move || {
        let props = slots
            .alert
            .with(|slot| AlertRenderProps::from_slot(slot, on_alert_close, on_alert_expire));
        render_alert.run(props)
    };

    let confirm_view = move || {
        let props = slots
            .confirm
            .with(|slot| ConfirmRenderProps::from_slot(slot, on_confirm, on_deny));
        render_confirm.run(props)
    };

    let choice_view = move || {
        render_choice.map(|render| {
            let props = slots
                .choice
                .with(|slot| ChoiceRenderProps::from_slot(slot, on_choice, on_choice_cancel));
            render.run(props)
        })
    };

    view! {
        {children.map(|children| children())}
        {alert_view}
        {confirm_view}
        {choice_view}
    }
}

/// Service registered by the nearest enclosing host, or the global one.
pub fn use_confirm_service() -> ConfirmService {
    use_context::<ConfirmService>().unwrap_or_else(ConfirmService::global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confirm_service::ServiceError;
    use contracts::{AlertSeverity, ChooseOptions, ConfirmOptions};
    use futures::executor::block_on;

    fn blank<T: 'static>() -> Callback<T, AnyView> {
        Callback::new(|_| view! { <></> }.into_any())
    }

    fn host_handlers(service: &ConfirmService) -> HostSlots {
        let slots = HostSlots::new();
        let config = Arc::new(HostConfig::default());
        service.add_handlers(Arc::new(HostHandlers::new(slots, config)));
        slots
    }

    #[test]
    fn test_host_registers_while_mounted() {
        let service = ConfirmService::new();
        let root = Owner::new();
        let host = root.child();

        host.with(|| {
            let _view = view! {
                <ConfirmComponentHost
                    render_alert=blank()
                    render_confirm=blank()
                    service=service.clone()
                />
            };
            assert_eq!(use_confirm_service().len(), 1);
        });
        assert_eq!(service.len(), 1);

        host.cleanup();
        assert!(service.is_empty());
        assert!(service.alert("late", AlertSeverity::Info).is_err());
    }

    #[test]
    fn test_confirm_settles_once() {
        Owner::new().with(|| {
            let service = ConfirmService::new();
            let slots = host_handlers(&service);

            let accepted = service.confirm(ConfirmOptions::new("Proceed?"));
            assert!(slots.confirm.with_untracked(|slot| slot.is_open));
            slots.settle_confirm(true);
            slots.settle_confirm(false);
            assert_eq!(block_on(accepted), Ok(()));
            assert!(!slots.confirm.with_untracked(|slot| slot.is_open));

            let denied = service.confirm(ConfirmOptions::new("Acknowledge").without_no());
            assert_eq!(slots.confirm.with_untracked(|slot| slot.no_caption.clone()), "");
            slots.settle_confirm(false);
            assert_eq!(block_on(denied), Err(ServiceError::Canceled));
        });
    }

    #[test]
    fn test_choose_settles_once() {
        Owner::new().with(|| {
            let service = ConfirmService::new();
            let slots = host_handlers(&service);
            let options = vec![ChoiceOption::new("option-1"), ChoiceOption::new("option-2")];

            let picked = service.choose(ChooseOptions::new(options.clone()));
            assert_eq!(slots.choice.with_untracked(|slot| slot.options.len()), 2);
            slots.settle_choice(Some(options[1].clone()));
            slots.settle_choice(None);
            assert_eq!(block_on(picked), Ok(options[1].clone()));

            let canceled = service.choose(ChooseOptions::new(options));
            slots.settle_choice(None);
            assert_eq!(block_on(canceled), Err(ServiceError::Canceled));
            assert!(!slots.choice.with_untracked(|slot| slot.is_open));
        });
    }

    #[test]
    fn test_alert_reaches_slot() {
        Owner::new().with(|| {
            let service = ConfirmService::new();
            let slots = host_handlers(&service);

            service.alert("Saved", AlertSeverity::Success).unwrap();

            slots.alert.with_untracked(|slot| {
                assert!(slot.is_visible);
                assert_eq!(slot.content.message, "Saved");
                assert_eq!(slot.content.duration_ms, 3_000);
            });
            slots.expire_alert(slots.alert.with_untracked(|slot| slot.show_id));
            assert!(!slots.alert.with_untracked(|slot| slot.is_visible));
        });
    }
}
