//! Slide-in preferences panel.

use dioxus::prelude::*;

use crate::app::context::use_page;
use crate::controller::UiEvent;
use crate::dom::bool_attr;
use crate::prefs::BINDINGS;

/// One checkbox per preference binding, plus a reset button.
/// Clicks inside the panel never count as outside clicks.
#[component]
pub fn SettingsPanel() -> Element {
    let page = use_page();
    let state = page.state();
    let prefs = state.prefs;

    rsx! {
        aside {
            id: "settings-panel",
            class: if state.settings_open { "settings-panel open" } else { "settings-panel" },
            role: "dialog",
            "aria-label": "Préférences",
            "aria-hidden": bool_attr(!state.settings_open),
            onclick: move |evt: MouseEvent| evt.stop_propagation(),

            header { class: "settings-header",
                h2 { "Préférences" }
                button {
                    id: "close-settings",
                    class: "icon-button",
                    r#type: "button",
                    "aria-label": "Fermer",
                    onclick: move |_| page.dispatch(UiEvent::SettingsClosed),
                    "×"
                }
            }

            for binding in BINDINGS.iter() {
                label { key: "{binding.control_id}", class: "setting",
                    input {
                        id: binding.control_id,
                        r#type: "checkbox",
                        checked: prefs.get(binding.preference),
                        // The control's own state is the new value
                        onchange: move |evt: FormEvent| {
                            page.dispatch(UiEvent::PreferenceChanged {
                                preference: binding.preference,
                                value: evt.checked(),
                            })
                        },
                    }
                    " "
                    {binding.preference.label()}
                }
            }

            button {
                id: "pref-reset",
                class: "button-secondary",
                r#type: "button",
                onclick: move |_| page.dispatch(UiEvent::PreferencesReset),
                "Réinitialiser"
            }
        }
    }
}
