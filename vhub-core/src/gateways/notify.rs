use crate::entities::*;

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    UserRegistered {
        user: &'a User,
    },
    EventCreated {
        event: &'a Event,
    },
    EventRegistrationConfirmed {
        registration: &'a EventRegistration,
    },
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
