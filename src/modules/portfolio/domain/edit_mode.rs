use serde::Serialize;
use utoipa::ToSchema;

/// Global, binary edit switch. Flipping it never touches the document.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Viewing => EditMode::Editing,
            EditMode::Editing => EditMode::Viewing,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing)
    }

    /// Single-line field representation for the current mode.
    pub fn field(&self, value: &str) -> FieldView {
        self.render(value, false)
    }

    /// Long-form field representation for the current mode.
    pub fn multiline_field(&self, value: &str) -> FieldView {
        self.render(value, true)
    }

    pub fn skill_affordances(&self) -> SkillAffordances {
        SkillAffordances {
            can_add: self.is_editing(),
            can_remove: self.is_editing(),
        }
    }

    fn render(&self, value: &str, multiline: bool) -> FieldView {
        match self {
            EditMode::Viewing => FieldView::Text {
                value: value.to_string(),
            },
            EditMode::Editing => FieldView::Input {
                value: value.to_string(),
                multiline,
            },
        }
    }
}

/// How a single editable value is presented.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldView {
    Text { value: String },
    Input { value: String, multiline: bool },
}

impl FieldView {
    pub fn value(&self) -> &str {
        match self {
            FieldView::Text { value } | FieldView::Input { value, .. } => value,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, FieldView::Input { .. })
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillAffordances {
    pub can_add: bool,
    pub can_remove: bool,
}
