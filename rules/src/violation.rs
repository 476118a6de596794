//! Domain rule violations.

use std::fmt;

use kin_core::Gender;
use thiserror::Error;

/// The relationship a caller tried to establish or sever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Parent,
    Sibling,
    Partner,
    Child,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Parent => write!(f, "parent"),
            Relation::Sibling => write!(f, "brother or sister"),
            Relation::Partner => write!(f, "partner"),
            Relation::Child => write!(f, "child"),
        }
    }
}

/// A violated domain rule.
///
/// The display string is the reason surfaced to callers; it never names
/// internal record ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("a person cannot be their own {0}")]
    SelfRelation(Relation),

    #[error("the declared parent gender ({expected}) does not match the person's record ({actual})")]
    GenderMismatch { expected: Gender, actual: Gender },

    #[error("the partners cannot have the same gender")]
    SameGender,

    #[error("a parent cannot be younger than their child")]
    ParentNotOlder,

    #[error("the marriage date cannot be earlier than the birth of either parent")]
    MarriageBeforeBirth,

    #[error("two parents are required to set a marriage date")]
    MissingParents,

    #[error("partners cannot be linked as parent and child")]
    PartnersAsParentChild,

    #[error("partners cannot be brother and sister")]
    PartnersAsSiblings,

    #[error("a brother or sister cannot become a parent of the same person")]
    SiblingAsParent,

    #[error("a parent cannot be a brother or sister of their own child")]
    ParentAsSibling,

    #[error("a person's own child cannot become their parent")]
    ChildAsParent,

    #[error("a person's parent cannot be registered as their child")]
    ParentAsChild,

    #[error("a brother or sister cannot be registered as a child of the same person")]
    SiblingAsChild,

    #[error("a parent's own child cannot be their partner")]
    ChildAsPartner,

    #[error("a person's parent cannot be their partner")]
    ParentAsPartner,

    #[error("the persons already belong to different families")]
    CrossFamily,

    #[error("no family with such ties was found")]
    NoSuchTie,

    #[error("the person is not a member of the specified family")]
    NotInFamily,

    #[error("the family already has a {}", .0.role_name())]
    SlotOccupied(Gender),
}
