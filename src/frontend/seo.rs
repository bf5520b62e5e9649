use tracing::{debug, warn};
use web_sys::{window, Element};
use yew::prelude::*;

use crate::content::Profile;
use crate::seo::PersonSchema;

fn inject_json_ld(profile: &Profile) -> Option<Element> {
    let json = match PersonSchema::from_profile(profile).to_json() {
        Ok(json) => json,
        Err(err) => {
            warn!(%err, "failed to serialize structured data");
            return None;
        }
    };

    let document = window()?.document()?;
    let head = document.head()?;
    let script = document.create_element("script").ok()?;
    script.set_attribute("type", "application/ld+json").ok()?;
    script.set_text_content(Some(&json));
    head.append_child(&script).ok()?;

    debug!(bytes = json.len(), "structured data injected");
    Some(script)
}

#[derive(Properties, PartialEq)]
pub struct SeoProps {
    pub profile: Profile,
}

/// Renders nothing; keeps a JSON-LD `<script>` in `<head>` while mounted.
#[function_component(Seo)]
pub fn seo(props: &SeoProps) -> Html {
    use_effect_with(props.profile.clone(), |profile| {
        let script = inject_json_ld(profile);
        move || {
            if let Some(script) = script {
                script.remove();
            }
        }
    });

    html! {}
}
