use crate::config::HostConfig;
use crate::host::{use_confirm_service, ConfirmComponentHost};
use crate::renderers;
use contracts::{AlertOptions, AlertSeverity, ChoiceOption, ChooseOptions, ConfirmOptions};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

/// Captions and durations used by the demo, embedded in the binary.
const DEMO_CONFIG: &str = r#"
[strings]
yes = "OK"
cancel = "Close"

[durations]
error = 8000
"#;

#[component]
pub fn App() -> impl IntoView {
    let config = HostConfig::from_toml_str(DEMO_CONFIG).unwrap_or_else(|err| {
        log::error!("{err}, using built-in captions");
        HostConfig::default()
    });

    view! {
        <ConfirmComponentHost
            render_alert=renderers::alert_toast()
            render_confirm=renderers::confirm_dialog()
            render_choice=renderers::choice_dialog()
            config=config
        >
            <DemoActions />
        </ConfirmComponentHost>
    }
}

#[component]
fn DemoActions() -> impl IntoView {
    let service = use_confirm_service();

    let notify = {
        let service = service.clone();
        move |_| {
            for severity in AlertSeverity::all() {
                if let Err(err) = service.alert(format!("{severity} alert"), severity) {
                    log::error!("alert failed: {err}");
                }
            }
        }
    };

    let ask = {
        let service = service.clone();
        move |_| {
            let service = service.clone();
            spawn_local(async move {
                let options = ConfirmOptions::new("Discard the draft?")
                    .title("Unsaved changes")
                    .no("Keep editing");
                let (message, severity) = match service.confirm(options).await {
                    Ok(()) => ("Draft discarded", AlertSeverity::Success),
                    Err(err) => {
                        log::info!("confirm finished: {err}");
                        ("Draft kept", AlertSeverity::Info)
                    }
                };
                let options = AlertOptions::new(severity).with_duration_ms(1500);
                if let Err(err) = service.alert(message, options) {
                    log::error!("alert failed: {err}");
                }
            });
        }
    };

    let pick = move |_| {
        let service = service.clone();
        spawn_local(async move {
            let options = ChooseOptions::new(vec![
                ChoiceOption::new("msk").with_label("Moscow"),
                ChoiceOption::new("spb").with_label("Saint Petersburg"),
                ChoiceOption::new(42).with_label("Warehouse #42"),
            ])
            .title("Ship from")
            .kind("list")
            .extra(json!({ "description": "Stock is reserved at the selected warehouse." }));

            match service.choose(options).await {
                Ok(option) => {
                    let message = format!("Selected {}", option.display_text());
                    if let Err(err) = service.alert(message, AlertSeverity::Success) {
                        log::error!("alert failed: {err}");
                    }
                }
                Err(err) => log::info!("choice finished: {err}"),
            }
        });
    };

    view! {
        <div class="demo-actions">
            <button class="button button--primary" on:click=notify>"Show alerts"</button>
            <button class="button button--primary" on:click=ask>"Ask to confirm"</button>
            <button class="button button--primary" on:click=pick>"Pick a warehouse"</button>
        </div>
    }
}
