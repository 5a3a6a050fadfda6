//! Lifecycle configuration.

/// Whether development-mode validation runs.
///
/// In `Production` none of the checks run at all; malformed input
/// proceeds with whatever attribute/property results it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Development,
    Production,
}

impl ValidationMode {
    /// Mode matching the current build profile.
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            ValidationMode::Development
        } else {
            ValidationMode::Production
        }
    }

    #[inline]
    pub const fn is_development(self) -> bool {
        matches!(self, ValidationMode::Development)
    }
}

impl Default for ValidationMode {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Configuration shared by every lifecycle operation of an environment.
///
/// # Example
///
/// ```ignore
/// let config = LifecycleConfig::default()
///     .with_has_dom(false)
///     .with_validation(ValidationMode::Production);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// Owner key of the fallback layout.
    pub default_layout_key: String,
    /// Whether a real DOM is present.
    pub has_dom: bool,
    pub validation: ValidationMode,
    /// Wrapper tag for components that declare none.
    pub default_tag_name: String,
    /// Static class added to every component element.
    pub base_class_name: String,
    /// Property consulted by the default visibility binding.
    pub visibility_property: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_layout_key: "template:components/-default".to_string(),
            has_dom: true,
            validation: ValidationMode::default(),
            default_tag_name: "div".to_string(),
            base_class_name: "spark-view".to_string(),
            visibility_property: "isVisible".to_string(),
        }
    }
}

impl LifecycleConfig {
    pub fn with_default_layout_key(mut self, key: impl Into<String>) -> Self {
        self.default_layout_key = key.into();
        self
    }

    pub fn with_has_dom(mut self, has_dom: bool) -> Self {
        self.has_dom = has_dom;
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_default_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.default_tag_name = tag_name.into();
        self
    }

    pub fn with_base_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.base_class_name = class_name.into();
        self
    }

    pub fn with_visibility_property(mut self, property: impl Into<String>) -> Self {
        self.visibility_property = property.into();
        self
    }
}
