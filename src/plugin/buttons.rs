use crate::{
    host::{FullEvent, SettingsEvent},
    models::{ActivityDescriptor, ButtonSpec, Movie},
    plugin::PLUGIN_NAME,
    services::normalize_title,
};

/// `full` event type fired once the detail view is built
const DETAIL_READY: &str = "complite";
/// Settings panel the menu entry is added to
const SETTINGS_PANEL: &str = "more";

const PLAY_ICON_SVG: &str = r#"<svg viewBox="0 0 24 24" width="22" height="22"><path fill="currentColor" d="M8 5v14l11-7z"/></svg>"#;

/// Detail view button that searches the site for the shown movie
pub fn detail_button(movie: &Movie) -> ButtonSpec {
    let title = normalize_title(movie.display_title());

    ButtonSpec {
        label: "Rezka".to_string(),
        icon_svg: Some(PLAY_ICON_SVG.to_string()),
        action: ActivityDescriptor {
            title: format!("Пошук: {}", title),
            component: PLUGIN_NAME.to_string(),
            query: Some(title),
            movie: Some(movie.clone()),
            ..Default::default()
        },
    }
}

/// Settings entry that opens the component in interactive mode
pub fn menu_entry() -> ButtonSpec {
    ButtonSpec {
        label: "Rezka Search".to_string(),
        icon_svg: None,
        action: ActivityDescriptor {
            title: "Rezka".to_string(),
            component: PLUGIN_NAME.to_string(),
            query: Some(String::new()),
            ..Default::default()
        },
    }
}

pub fn on_detail_view(event: &FullEvent) {
    if event.kind != DETAIL_READY {
        return;
    }

    let movie = event.movie.clone().unwrap_or_default();
    tracing::debug!(title = %movie.display_title(), "Adding search button to detail view");
    event.buttons.append(detail_button(&movie));
}

pub fn on_settings_open(event: &SettingsEvent) {
    if event.name != SETTINGS_PANEL {
        return;
    }

    event.body.append(menu_entry());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ButtonContainer;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingContainer {
        buttons: Mutex<Vec<ButtonSpec>>,
    }

    impl ButtonContainer for RecordingContainer {
        fn append(&self, button: ButtonSpec) {
            self.buttons.lock().unwrap().push(button);
        }
    }

    #[test]
    fn test_detail_button_searches_normalized_title() {
        let movie = Movie::titled("Дюна (2021) Remastered");
        let button = detail_button(&movie);

        assert_eq!(button.label, "Rezka");
        assert_eq!(button.action.title, "Пошук: Дюна");
        assert_eq!(button.action.component, "RezkaBalancer");
        assert_eq!(button.action.query.as_deref(), Some("Дюна"));
        assert_eq!(button.action.movie, Some(movie));
    }

    #[test]
    fn test_detail_button_uses_series_name() {
        let movie = Movie {
            name: Some("Dark (2017)".to_string()),
            ..Default::default()
        };
        assert_eq!(detail_button(&movie).action.query.as_deref(), Some("Dark"));
    }

    #[test]
    fn test_menu_entry_opens_interactive_search() {
        let entry = menu_entry();
        assert_eq!(entry.label, "Rezka Search");
        assert_eq!(entry.action.query.as_deref(), Some(""));
        assert!(entry.action.movie.is_none());
    }

    #[test]
    fn test_detail_view_ignores_other_event_types() {
        let container = Arc::new(RecordingContainer::default());
        let mut event = FullEvent {
            kind: "start".to_string(),
            movie: Some(Movie::titled("Heat")),
            buttons: container.clone(),
        };

        on_detail_view(&event);
        assert!(container.buttons.lock().unwrap().is_empty());

        event.kind = "complite".to_string();
        on_detail_view(&event);
        assert_eq!(container.buttons.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_settings_only_extends_more_panel() {
        let container = Arc::new(RecordingContainer::default());

        on_settings_open(&SettingsEvent {
            name: "interface".to_string(),
            body: container.clone(),
        });
        on_settings_open(&SettingsEvent {
            name: "more".to_string(),
            body: container.clone(),
        });

        let buttons = container.buttons.lock().unwrap();
        assert_eq!(buttons.as_slice(), &[menu_entry()]);
    }
}
