//! Resources the admin core only ever counts.
//!
//! Their documents are kept as raw JSON: nothing here reads their fields beyond `_id`.

use luma_api::{ApiEntity, NoAction};
use serde::{Deserialize, Serialize};
use serde_json::Value;

macro_rules! opaque_record {
    ($(#[$meta:meta])* $name:ident => $resource:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Value);

        impl ApiEntity for $name {
            const RESOURCE: &'static str = $resource;
            type Create = Value;
            type Update = Value;
            type Action = NoAction;

            fn id(&self) -> Option<&str> {
                self.0.get("_id").and_then(Value::as_str)
            }
        }
    };
}

opaque_record!(
    /// A calendar event (`/events`).
    Event => "events"
);
opaque_record!(
    /// A child's progress in one of the games (`/game-progress`).
    GameProgress => "game-progress"
);
opaque_record!(
    /// A post in the parents' community feed (`/community`).
    CommunityPost => "community"
);
