pub mod dashboard_screen;
pub mod form_screen;

use crate::state::DashboardState;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Form,
    Dashboard(DashboardState),
}
