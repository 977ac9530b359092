use crate::clock::Clock;
use crate::geo::Geocoder;
use crate::history::History;
use crate::number::NumberService;
use crate::resolve::NumberResolver;
use std::sync::Mutex;

pub struct AppState {
    /// Lookups are serialized behind this lock: exactly one in flight,
    /// later requests wait their turn.
    pub resolver: Mutex<NumberResolver<NumberService, Geocoder, Clock>>,
    pub history: Mutex<History>,
}
