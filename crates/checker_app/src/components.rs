//! How each Bootstrap component used by the page is instantiated.
//!
//! The adapter turns these into JS calls on the `bootstrap` global; keeping
//! the table here lets it be checked without a browser.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapComponent {
    Tooltip,
    Popover,
    Collapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Str(&'static str),
}

impl BootstrapComponent {
    /// Property of `window.bootstrap` holding the component class.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tooltip => "Tooltip",
            Self::Popover => "Popover",
            Self::Collapse => "Collapse",
        }
    }

    pub fn options(self) -> &'static [(&'static str, OptionValue)] {
        match self {
            Self::Tooltip => &[],
            Self::Popover => &[("trigger", OptionValue::Str("focus"))],
            // A fresh instance would otherwise toggle, closing open sections.
            Self::Collapse => &[("toggle", OptionValue::Bool(false))],
        }
    }

    /// Collapse sections may already own an instance from the data API, and
    /// Bootstrap allows only one per element.
    pub fn reuses_instance(self) -> bool {
        matches!(self, Self::Collapse)
    }

    /// Method called on the instance once it exists.
    pub fn after_construct(self) -> Option<&'static str> {
        match self {
            Self::Collapse => Some("show"),
            Self::Tooltip | Self::Popover => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_is_shown_through_bootstrap_without_toggling() {
        let collapse = BootstrapComponent::Collapse;
        assert_eq!(collapse.name(), "Collapse");
        assert_eq!(collapse.options(), &[("toggle", OptionValue::Bool(false))]);
        assert_eq!(collapse.after_construct(), Some("show"));
        assert!(collapse.reuses_instance());
    }

    #[test]
    fn popovers_open_on_focus() {
        assert_eq!(
            BootstrapComponent::Popover.options(),
            &[("trigger", OptionValue::Str("focus"))]
        );
    }

    #[test]
    fn tooltips_are_plain_constructions() {
        let tooltip = BootstrapComponent::Tooltip;
        assert!(tooltip.options().is_empty());
        assert_eq!(tooltip.after_construct(), None);
        assert!(!tooltip.reuses_instance());
    }
}
