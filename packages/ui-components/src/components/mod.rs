pub mod article;
pub mod button;
pub mod fields;
pub mod params_form;

pub use article::*;
pub use button::*;
pub use fields::*;
pub use params_form::*;
