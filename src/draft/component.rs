use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::limits::MAX_COMPONENTS_PER_ROW;

/// Visual style of an interactive (non-link) button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

/// Option shown in a string select menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub default: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            default: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_selection(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

/// String select menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenu {
    pub custom_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_values: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_values: Option<u8>,
    #[serde(default)]
    pub disabled: bool,
}

/// Interactive element placed inside a [`ComponentRow`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// Button that sends an interaction carrying `custom_id`
    Button {
        style: ButtonStyle,
        label: String,
        custom_id: String,
        #[serde(default)]
        disabled: bool,
    },
    /// Button that opens `url` in the browser
    LinkButton {
        label: String,
        url: String,
        #[serde(default)]
        disabled: bool,
    },
    /// String select menu
    SelectMenu(SelectMenu),
}

impl Component {
    pub fn button(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Component::Button {
            style: ButtonStyle::default(),
            label: label.into(),
            custom_id: custom_id.into(),
            disabled: false,
        }
    }

    pub fn styled_button(
        style: ButtonStyle,
        label: impl Into<String>,
        custom_id: impl Into<String>,
    ) -> Self {
        Component::Button {
            style,
            label: label.into(),
            custom_id: custom_id.into(),
            disabled: false,
        }
    }

    pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Component::LinkButton {
            label: label.into(),
            url: url.into(),
            disabled: false,
        }
    }

    pub fn select_menu(custom_id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Component::SelectMenu(SelectMenu {
            custom_id: custom_id.into(),
            placeholder: None,
            options,
            min_values: None,
            max_values: None,
            disabled: false,
        })
    }

    /// Mark the component as disabled (greyed out, not clickable)
    pub fn disabled(mut self, value: bool) -> Self {
        match &mut self {
            Component::Button { disabled, .. }
            | Component::LinkButton { disabled, .. }
            | Component::SelectMenu(SelectMenu { disabled, .. }) => *disabled = value,
        }
        self
    }

    /// Set the placeholder text of a select menu
    ///
    /// Buttons have no placeholder and are returned unchanged.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Component::SelectMenu(menu) = &mut self {
            menu.placeholder = Some(text.into());
        }
        self
    }

    /// Whether the component is a select menu
    ///
    /// Discord renders a select menu as the only element of its row.
    pub fn is_select_menu(&self) -> bool {
        matches!(self, Component::SelectMenu(_))
    }
}

/// Horizontal group of 1 to 5 components
///
/// Can only be created through [`ComponentRow::new`], so every row held by a
/// draft already satisfies the per-row bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRow {
    components: Vec<Component>,
}

impl ComponentRow {
    /// Wrap components into a row
    ///
    /// # Errors
    ///
    /// * `EmptyComponentRow` - `components` is empty
    /// * `ComponentRowTooLarge` - more than 5 components
    pub fn new(components: Vec<Component>) -> Result<Self, ValidationError> {
        if components.is_empty() {
            return Err(ValidationError::EmptyComponentRow);
        }

        if components.len() > MAX_COMPONENTS_PER_ROW {
            return Err(ValidationError::ComponentRowTooLarge {
                len: components.len(),
            });
        }

        Ok(Self { components })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always false, a row holds at least one component
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}

impl TryFrom<Vec<Component>> for ComponentRow {
    type Error = ValidationError;

    fn try_from(components: Vec<Component>) -> Result<Self, Self::Error> {
        ComponentRow::new(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn buttons(count: usize) -> Vec<Component> {
        (0..count)
            .map(|i| Component::button(format!("Button {i}"), format!("btn_{i}")))
            .collect()
    }

    #[rstest]
    #[case::one(1)]
    #[case::three(3)]
    #[case::five(5)]
    fn test_row_accepts_one_to_five_components(#[case] count: usize) {
        let row = ComponentRow::new(buttons(count)).unwrap();
        assert_eq!(row.len(), count);
    }

    #[test]
    fn test_row_rejects_empty() {
        let result = ComponentRow::new(Vec::new());
        assert!(matches!(result, Err(ValidationError::EmptyComponentRow)));
    }

    #[rstest]
    #[case::six(6)]
    #[case::ten(10)]
    fn test_row_rejects_oversized(#[case] count: usize) {
        let result = ComponentRow::new(buttons(count));
        assert!(
            matches!(result, Err(ValidationError::ComponentRowTooLarge { len }) if len == count)
        );
    }

    #[test]
    fn test_disabled_applies_to_every_kind() {
        let components = vec![
            Component::button("Ok", "ok").disabled(true),
            Component::link_button("Docs", "https://example.com").disabled(true),
            Component::select_menu("pick", vec![SelectOption::new("A", "a")]).disabled(true),
        ];

        for component in components {
            let disabled = match component {
                Component::Button { disabled, .. }
                | Component::LinkButton { disabled, .. }
                | Component::SelectMenu(SelectMenu { disabled, .. }) => disabled,
            };
            assert!(disabled);
        }
    }

    #[test]
    fn test_placeholder_ignored_on_buttons() {
        let button = Component::button("Ok", "ok").placeholder("ignored");
        assert_eq!(button, Component::button("Ok", "ok"));

        let menu = Component::select_menu("pick", Vec::new()).placeholder("Choose one");
        match menu {
            Component::SelectMenu(menu) => {
                assert_eq!(menu.placeholder.as_deref(), Some("Choose one"));
            }
            other => panic!("Unexpected component: {other:?}"),
        }
    }

    #[test]
    fn test_component_serializes_with_type_tag() {
        let json = serde_json::to_value(Component::link_button("Docs", "https://example.com"))
            .unwrap();
        assert_eq!(json["type"], "link_button");
        assert_eq!(json["url"], "https://example.com");
    }
}
