use crate::repositories::*;

/// The complete database interface as required by the use cases.
pub trait Db:
    UserRepo
    + AddressRepo
    + OrganizationRepo
    + SubsidiaryRepo
    + MissionRepo
    + EventTypeRepo
    + EventRepo
    + EventRegistrationRepo
    + SetRepo
    + PhotoRepo
    + NewsRepo
    + CommentRepo
    + SequenceRepo
{
}

impl<T> Db for T where
    T: UserRepo
        + AddressRepo
        + OrganizationRepo
        + SubsidiaryRepo
        + MissionRepo
        + EventTypeRepo
        + EventRepo
        + EventRegistrationRepo
        + SetRepo
        + PhotoRepo
        + NewsRepo
        + CommentRepo
        + SequenceRepo
{
}
