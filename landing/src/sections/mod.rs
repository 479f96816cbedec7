// Landing page sections
// Developed by the Gmash LLC web team (c)2026

mod about;
mod contact;
mod footer;
mod hero;
mod lead_capture_form;
mod nav;
mod process;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use lead_capture_form::LeadCaptureForm;
pub use nav::Nav;
pub use process::Process;
pub use services::Services;
pub use testimonials::Testimonials;
