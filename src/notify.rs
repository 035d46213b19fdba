use vhub_core::gateways::notify::{NotificationEvent, NotificationGateway};

/// Default gateway that only logs notifications.
///
/// An e-mail gateway can be plugged in here once the instance has an
/// outgoing mail account.
pub struct LogNotifyGW;

impl NotificationGateway for LogNotifyGW {
    fn notify(&self, event: NotificationEvent) {
        match event {
            NotificationEvent::UserRegistered { user } => {
                log::info!(
                    "New user registered: {} (e-mail confirmation pending)",
                    user.email
                );
            }
            NotificationEvent::EventCreated { event } => {
                log::info!("New event created: {} (id {})", event.title, event.id);
            }
            NotificationEvent::EventRegistrationConfirmed { registration } => {
                log::info!(
                    "User {} registered for event {} with registration number {}",
                    registration.user,
                    registration.event,
                    registration.registration_number
                );
            }
        }
    }
}
