pub mod aggregates;
pub mod experience;
pub mod interests;
pub mod legacy;
pub mod matcher;
pub mod normalize;
pub mod personas;
pub mod pipeline;
pub mod projects;
pub mod radar;
pub mod scorer;
pub mod tally;
