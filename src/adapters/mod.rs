pub mod wizard_events;

pub use wizard_events::TracingWizardEvents;
