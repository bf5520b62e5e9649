use portfolio_site::content::SiteContent;
use portfolio_site::parallax::{parallax_offset, Point, Viewport};
use portfolio_site::scroll::{ScrollMetrics, ScrollTracker, SectionRect};
use portfolio_site::seo::PersonSchema;
use portfolio_site::ticker::SkillTicker;
use portfolio_site::typewriter::{Step, Typewriter};

#[test]
fn hero_greeting_reveals_and_highlights_owner_name() {
    let content = SiteContent::load().unwrap();
    let mut writer = Typewriter::new(&content.hero.typewriter()).unwrap();

    let steps = writer.advance(60_000);
    assert_eq!(steps.last(), Some(&Step::Completed));

    let state = writer.state();
    assert!(state.is_complete);
    assert_eq!(state.visible_text(), content.hero.greeting);

    let names: Vec<_> = state
        .segments
        .iter()
        .filter(|segment| segment.highlighted)
        .map(|segment| segment.text.as_str())
        .collect();
    assert_eq!(names, vec![content.profile.name.as_str()]);
}

#[test]
fn hero_reveal_respects_configured_delay() {
    let content = SiteContent::load().unwrap();
    let config = content.hero.typewriter();
    let mut writer = Typewriter::new(&config).unwrap();

    let delay = u64::from(config.delay_ms());
    assert!(delay > 0);
    assert!(writer.advance(delay - 1).is_empty());
    assert_eq!(writer.advance(1), vec![Step::Started]);
}

#[test]
fn tracker_follows_the_page_sections() {
    let content = SiteContent::load().unwrap();
    let mut tracker = ScrollTracker::new(content.site.sections.iter().cloned());
    let viewport_height = 800.0;
    let document_height = 3_800.0;

    // Sections stacked below a 900px hero, each 1000px tall.
    let offsets = [("projects", 900.0), ("skills", 1_900.0), ("contact", 2_900.0)];
    let at = |scroll_y: f64| {
        let layout = move |id: &str| {
            offsets
                .iter()
                .find(|(section, _)| *section == id)
                .map(|(_, top)| SectionRect::new(top - scroll_y, top + 1_000.0 - scroll_y))
        };
        let metrics = ScrollMetrics {
            scroll_y,
            viewport_height,
            document_height,
        };
        (metrics, layout)
    };

    let (metrics, layout) = at(0.0);
    tracker.update(&metrics, &layout);
    assert_eq!(tracker.snapshot().active_section, None);
    assert!(!tracker.snapshot().show_back_to_top);

    let (metrics, layout) = at(1_850.0);
    tracker.update(&metrics, &layout);
    assert!(tracker.snapshot().is_active("skills"));
    assert!(tracker.snapshot().show_back_to_top);

    let (metrics, layout) = at(3_000.0);
    tracker.update(&metrics, &layout);
    assert!(tracker.snapshot().is_active("contact"));
    assert_eq!(tracker.snapshot().progress, 1.0);
}

#[test]
fn ticker_and_schema_come_from_bundled_content() {
    let content = SiteContent::load().unwrap();

    let ticker = SkillTicker::new(&content.skills, content.ticker.cycle_seconds);
    assert_eq!(ticker.items().count(), content.skills.len() * 2);
    assert!(ticker
        .style()
        .contains(&format!("--ticker-count: {};", content.skills.len())));

    let json = PersonSchema::from_profile(&content.profile).to_json().unwrap();
    assert!(json.contains(r#""@type":"Person""#));
}

#[test]
fn bundled_blobs_drift_toward_the_pointer() {
    let content = SiteContent::load().unwrap();
    let viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    for blob in &content.blobs {
        let offset = parallax_offset(Point::new(1000.0, 800.0), viewport, blob.factor);
        assert!(offset.x > 0.0 && offset.y > 0.0, "{} did not move", blob.class);
    }
}
