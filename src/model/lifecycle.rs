//! Detachment policy declarations for owner deletion.
//!
//! Every resource type that references a user declares here how it behaves
//! when its owner is deleted. The lifecycle service consults these
//! declarations instead of hard-coding per-table control flow, so adding a
//! new owned resource type is a declaration plus a repository call, not a new
//! branch in the deletion algorithm.

/// Retention behavior of an owned resource when its owner is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachPolicy {
    /// The user reference is nulled and the resource survives anonymized.
    Detach,
    /// The resource row is itself soft-deleted; it has no meaning without
    /// its owner.
    CascadeSoftDelete,
}

/// Resource types that reference a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedResource {
    Race,
    Trail,
    BoatOwnership,
}

impl OwnedResource {
    /// Every owned resource type, in the order the lifecycle service
    /// processes them during a deletion.
    pub const ALL: [OwnedResource; 3] = [
        OwnedResource::Race,
        OwnedResource::Trail,
        OwnedResource::BoatOwnership,
    ];

    /// Declared retention behavior on owner deletion.
    pub fn policy(self) -> DetachPolicy {
        match self {
            OwnedResource::Race | OwnedResource::Trail => DetachPolicy::Detach,
            OwnedResource::BoatOwnership => DetachPolicy::CascadeSoftDelete,
        }
    }
}
