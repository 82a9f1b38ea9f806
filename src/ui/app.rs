/// Main page UI: search form, generated site/geo buttons, contact form

use patternfly_yew::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::criteria::{self, LocalStore};
use crate::query::{self, SearchCriteria};
use crate::registry;
use crate::relay::{self, ContactMessage};
use crate::theme::{self, Theme};

const WORK_TYPES: &[(&str, &str)] = &[
    ("", "Any"),
    ("On-Site", "On-Site"),
    ("Remote", "Remote"),
    ("Hybrid", "Hybrid"),
];

// Values are Google's qdr recency codes, persisted and transported raw.
const DATE_WINDOWS: &[(&str, &str)] = &[
    ("", "Any time"),
    ("d", "Past 24 hours"),
    ("w", "Past week"),
    ("m", "Past month"),
    ("y", "Past year"),
];

const STATUS_HIDE_MS: i32 = 5_000;

#[derive(Clone, PartialEq)]
enum FormStatus {
    Hidden,
    Pending,
    Success(String),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(theme::detect_initial);
    let keywords = use_state(String::new);
    let location = use_state(String::new);
    let work_type = use_state(String::new);
    let date_posted = use_state(String::new);
    let keywords_ref = use_node_ref();

    let contact_name = use_state(String::new);
    let contact_email = use_state(String::new);
    let contact_message = use_state(String::new);
    let form_status = use_state(|| FormStatus::Hidden);

    let sites = registry::ordered_sites(registry::ATS_SITES, registry::PRIORITY_SITES);

    // Apply the startup theme and restore saved criteria on mount
    {
        let theme = theme.clone();
        let keywords = keywords.clone();
        let location = location.clone();
        let work_type = work_type.clone();
        let date_posted = date_posted.clone();

        use_effect_with((), move |_| {
            theme::apply(*theme);

            match criteria::load(&LocalStore) {
                Ok(Some(saved)) => {
                    keywords.set(saved.keywords);
                    location.set(saved.location);
                    // Stale or hand-edited storage must not pick a radio button
                    if restorable_work_type(&saved.work_type) {
                        work_type.set(saved.work_type);
                    }
                    if restorable_date_window(&saved.date_posted) {
                        date_posted.set(saved.date_posted);
                    }
                }
                Ok(None) => {}
                Err(err) => log::warn!("discarding saved criteria: {err}"),
            }
            || ()
        });
    }

    // Theme toggle handler
    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.flip();
            theme::apply(next);
            theme.set(next);
        })
    };

    // Text input handlers
    let on_keywords_input = {
        let keywords = keywords.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                keywords.set(input.value());
            }
        })
    };

    let on_location_input = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                location.set(input.value());
            }
        })
    };

    // One button per ATS site, in priority-then-alphabetical order
    let site_buttons: Html = sites
        .iter()
        .map(|site| {
            let fragment = site.fragment;
            let keywords = keywords.clone();
            let location = location.clone();
            let work_type = work_type.clone();
            let date_posted = date_posted.clone();
            let keywords_ref = keywords_ref.clone();

            let onclick = Callback::from(move |_: MouseEvent| {
                let criteria = snapshot(&keywords, &location, &work_type, &date_posted);
                if !require_keywords(
                    &criteria,
                    &keywords_ref,
                    "Please enter at least one keyword.",
                ) {
                    return;
                }
                run_search(&criteria, fragment);
            });

            html! {
                <button type="button" class="ats-button" {onclick}>{site.name}</button>
            }
        })
        .collect();

    // Geo presets write their pre-formatted expression straight into the
    // location field; the query builder passes it through verbatim.
    let geo_buttons: Html = registry::GEO_PRESETS
        .iter()
        .map(|geo| {
            let fragment = geo.fragment;
            let location = location.clone();

            let onclick = Callback::from(move |_: MouseEvent| {
                location.set(fragment.to_string());
            });

            html! {
                <button type="button" class="pill-button" {onclick}>{geo.name}</button>
            }
        })
        .collect();

    // Search every registry site at once, behind a confirmation naming
    // the exact tab count
    let on_search_all = {
        let keywords = keywords.clone();
        let location = location.clone();
        let work_type = work_type.clone();
        let date_posted = date_posted.clone();
        let keywords_ref = keywords_ref.clone();
        let sites = sites.clone();

        Callback::from(move |_| {
            let criteria = snapshot(&keywords, &location, &work_type, &date_posted);
            if !require_keywords(
                &criteria,
                &keywords_ref,
                "Please enter at least one keyword before \"Search All\".",
            ) {
                return;
            }

            let prompt = format!(
                "This will open {} new tabs. Your browser might ask for permission. Do you want to continue?",
                sites.len()
            );
            let confirmed = web_sys::window()
                .map(|window| window.confirm_with_message(&prompt).unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            for site in &sites {
                run_search(&criteria, site.fragment);
            }
        })
    };

    // Clear handler: drop the persisted snapshot and reset every field
    let on_clear = {
        let keywords = keywords.clone();
        let location = location.clone();
        let work_type = work_type.clone();
        let date_posted = date_posted.clone();

        Callback::from(move |_| {
            criteria::clear(&LocalStore);
            keywords.set(String::new());
            location.set(String::new());
            work_type.set(String::new());
            date_posted.set(String::new());
        })
    };

    // Contact form handlers
    let on_contact_name_input = {
        let contact_name = contact_name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                contact_name.set(input.value());
            }
        })
    };

    let on_contact_email_input = {
        let contact_email = contact_email.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                contact_email.set(input.value());
            }
        })
    };

    let on_contact_message_input = {
        let contact_message = contact_message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                contact_message.set(input.value());
            }
        })
    };

    let on_contact_submit = {
        let contact_name = contact_name.clone();
        let contact_email = contact_email.clone();
        let contact_message = contact_message.clone();
        let form_status = form_status.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let payload = ContactMessage {
                access_key: relay::ACCESS_KEY.to_string(),
                name: (*contact_name).clone(),
                email: (*contact_email).clone(),
                message: (*contact_message).clone(),
            };

            form_status.set(FormStatus::Pending);

            let contact_name = contact_name.clone();
            let contact_email = contact_email.clone();
            let contact_message = contact_message.clone();
            let form_status = form_status.clone();

            spawn_local(async move {
                match relay::submit(&payload).await {
                    Ok(message) => {
                        form_status.set(FormStatus::Success(message));
                        // Only a delivered message resets the form
                        contact_name.set(String::new());
                        contact_email.set(String::new());
                        contact_message.set(String::new());
                        schedule_status_hide(form_status.clone());
                    }
                    Err(err) => {
                        form_status.set(FormStatus::Error(err.to_string()));
                    }
                }
            });
        })
    };

    let theme_label = if *theme == Theme::Dark {
        "☀️ Light mode"
    } else {
        "🌙 Dark mode"
    };

    html! {
        <div class="page">
            <header class="page-header">
                <h1 class="page-title">{"Dork Board"}</h1>
                <p class="page-subtitle">{"Search ATS job boards with Google dorks"}</p>
                <Button onclick={on_toggle_theme} variant={ButtonVariant::Secondary}>
                    {theme_label}
                </Button>
            </header>

            <section class="search-form">
                <div class="field">
                    <label for="keywords">{"Keywords (comma-separated)"}</label>
                    <input
                        id="keywords"
                        type="text"
                        ref={keywords_ref.clone()}
                        placeholder="rust engineer, backend"
                        value={(*keywords).clone()}
                        oninput={on_keywords_input}
                    />
                </div>

                <div class="field">
                    <label for="location">{"Location (comma-separated or preset)"}</label>
                    <input
                        id="location"
                        type="text"
                        placeholder="Berlin, Remote Europe"
                        value={(*location).clone()}
                        oninput={on_location_input}
                    />
                </div>

                <div class="geo-buttons">
                    {geo_buttons}
                </div>

                <fieldset class="radio-group">
                    <legend>{"Work type"}</legend>
                    {for WORK_TYPES.iter().map(|(value, label)| {
                        let handle = work_type.clone();
                        let chosen = value.to_string();
                        let onchange = Callback::from(move |_: Event| handle.set(chosen.clone()));
                        html! {
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name="workType"
                                    value={*value}
                                    checked={*work_type == *value}
                                    {onchange}
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    })}
                </fieldset>

                <fieldset class="radio-group">
                    <legend>{"Date posted"}</legend>
                    {for DATE_WINDOWS.iter().map(|(value, label)| {
                        let handle = date_posted.clone();
                        let chosen = value.to_string();
                        let onchange = Callback::from(move |_: Event| handle.set(chosen.clone()));
                        html! {
                            <label class="radio-option">
                                <input
                                    type="radio"
                                    name="datePosted"
                                    value={*value}
                                    checked={*date_posted == *value}
                                    {onchange}
                                />
                                <span>{*label}</span>
                            </label>
                        }
                    })}
                </fieldset>

                <div class="action-buttons">
                    <Button onclick={on_search_all} variant={ButtonVariant::Primary}>
                        {"🔎 Search All"}
                    </Button>
                    <Button onclick={on_clear} variant={ButtonVariant::Secondary}>
                        {"🧹 Clear"}
                    </Button>
                </div>
            </section>

            <section class="site-buttons">
                <h2>{"Search one board"}</h2>
                {site_buttons}
            </section>

            <section class="contact">
                <h2>{"Contact"}</h2>

                {match &*form_status {
                    FormStatus::Hidden => html! {},
                    FormStatus::Pending => html! {
                        <div class="form-status">
                            <Spinner />
                            <p>{"Please wait..."}</p>
                        </div>
                    },
                    FormStatus::Success(message) => html! {
                        <Alert r#type={AlertType::Success} title={message.clone()} inline={true}>
                        </Alert>
                    },
                    FormStatus::Error(message) => html! {
                        <Alert r#type={AlertType::Danger} title={message.clone()} inline={true}>
                        </Alert>
                    },
                }}

                <form onsubmit={on_contact_submit}>
                    <div class="field">
                        <label for="contact-name">{"Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            required={true}
                            value={(*contact_name).clone()}
                            oninput={on_contact_name_input}
                        />
                    </div>
                    <div class="field">
                        <label for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            required={true}
                            value={(*contact_email).clone()}
                            oninput={on_contact_email_input}
                        />
                    </div>
                    <div class="field">
                        <label for="contact-message">{"Message"}</label>
                        <textarea
                            id="contact-message"
                            required={true}
                            value={(*contact_message).clone()}
                            oninput={on_contact_message_input}
                        />
                    </div>
                    <button type="submit" class="submit-button">{"Send"}</button>
                </form>
            </section>
        </div>
    }
}

// Helper functions

/// Snapshot the form into a fresh criteria record, trimming free text.
fn snapshot(keywords: &str, location: &str, work_type: &str, date_posted: &str) -> SearchCriteria {
    SearchCriteria {
        keywords: keywords.trim().to_string(),
        location: location.trim().to_string(),
        work_type: work_type.to_string(),
        date_posted: date_posted.to_string(),
    }
}

/// A restored work-type may only be applied if it is safe to use and
/// names an actual radio option; a value matching no control would leave
/// the group unselected while searches silently carried it.
fn restorable_work_type(value: &str) -> bool {
    criteria::is_safe_work_type(value) && WORK_TYPES.iter().any(|(option, _)| *option == value)
}

/// Same gate for the restored date filter: only known recency codes may
/// select a radio.
fn restorable_date_window(value: &str) -> bool {
    !value.is_empty() && DATE_WINDOWS.iter().any(|(option, _)| *option == value)
}

/// Keywords gate for every search action: empty keywords raise a blocking
/// alert, refocus the keyword field, and abort.
fn require_keywords(criteria: &SearchCriteria, keywords_ref: &NodeRef, message: &str) -> bool {
    if !criteria.keywords.is_empty() {
        return true;
    }

    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    if let Some(input) = keywords_ref.cast::<HtmlInputElement>() {
        let _ = input.focus();
    }
    false
}

/// Single-site search flow: persist the snapshot, build the URL, open a
/// new tab. Keywords were validated by the caller.
fn run_search(criteria: &SearchCriteria, site_fragment: &str) {
    criteria::save(&LocalStore, criteria);
    let url = query::build_search_url(criteria, site_fragment);

    match web_sys::window() {
        Some(window) => {
            if window.open_with_url_and_target(&url, "_blank").is_err() {
                log::warn!("browser refused to open search tab for {site_fragment}");
            }
        }
        None => log::warn!("no window available to open search tab"),
    }
}

/// Hide the contact status message after a fixed delay.
fn schedule_status_hide(status: UseStateHandle<FormStatus>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::once_into_js(move || status.set(FormStatus::Hidden));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            STATUS_HIDE_MS,
        )
        .is_err()
    {
        log::warn!("failed to schedule status auto-hide");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restored_work_type_must_name_an_existing_radio() {
        assert!(restorable_work_type("On-Site"));
        assert!(restorable_work_type("Remote"));
        assert!(restorable_work_type("Hybrid"));

        // Safe character class alone is not enough
        assert!(!restorable_work_type("Onsite"));
        assert!(!restorable_work_type("remote"));
        // Unsafe or empty values stay rejected
        assert!(!restorable_work_type(""));
        assert!(!restorable_work_type("On Site"));
        assert!(!restorable_work_type(r#""Remote""#));
    }

    #[test]
    fn test_restored_date_window_must_be_a_known_recency_code() {
        assert!(restorable_date_window("d"));
        assert!(restorable_date_window("w"));
        assert!(restorable_date_window("m"));
        assert!(restorable_date_window("y"));

        assert!(!restorable_date_window(""));
        assert!(!restorable_date_window("x"));
        assert!(!restorable_date_window("week"));
    }
}
