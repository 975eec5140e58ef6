pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod role_picker;
pub mod text_input;
pub mod toast_stack;
