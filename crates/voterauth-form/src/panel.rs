//! Two-state panel toggle between the sign-in and registration forms

/// Which form panel is visible. Exactly one at a time; sign-in initially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    SignIn,
    Register,
}

/// Header and toggle-link copy for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub toggle: &'static str,
}

impl Panel {
    /// The panel shown on page load.
    pub const fn initial() -> Self {
        Panel::SignIn
    }

    pub const fn other(self) -> Self {
        match self {
            Panel::SignIn => Panel::Register,
            Panel::Register => Panel::SignIn,
        }
    }

    pub const fn labels(self) -> PanelLabels {
        match self {
            Panel::SignIn => PanelLabels {
                title: "Welcome",
                subtitle: "Welcome back, please login to your account.",
                toggle: "Don't have an account? Create an Account",
            },
            Panel::Register => PanelLabels {
                title: "Create Account",
                subtitle: "Please fill the form to create an account.",
                toggle: "Already have an account? Sign In",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_panel_is_sign_in() {
        assert_eq!(Panel::initial(), Panel::SignIn);
    }

    #[test]
    fn other_flips_between_the_two() {
        assert_eq!(Panel::SignIn.other(), Panel::Register);
        assert_eq!(Panel::Register.other(), Panel::SignIn);
    }

    #[test]
    fn labels_match_the_panel() {
        let signin = Panel::SignIn.labels();
        assert_eq!(signin.title, "Welcome");
        assert_eq!(signin.subtitle, "Welcome back, please login to your account.");
        assert_eq!(signin.toggle, "Don't have an account? Create an Account");

        let register = Panel::Register.labels();
        assert_eq!(register.title, "Create Account");
        assert_eq!(register.subtitle, "Please fill the form to create an account.");
        assert_eq!(register.toggle, "Already have an account? Sign In");
    }
}
