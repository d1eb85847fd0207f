use crate::domain::{Builder, Community, Coordinates, Location, Status};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A Texas community with the given builder and dateAdded; other fields fixed.
pub fn community(id: &str, builder: &str, date_added: &str) -> Community {
    Community {
        id: id.to_string(),
        builder: Builder {
            name: builder.to_string(),
            logo: format!("images/{}.png", builder.to_lowercase().replace(' ', "")),
        },
        location: Location {
            name: format!("{builder} Estates"),
            county: "Dallas County".to_string(),
            state: "Texas".to_string(),
        },
        homes: 100,
        lot_size: 0.25,
        date_added: date_added.to_string(),
        status: Status::Prime,
        credits_required: 1,
        pricing_factors: vec!["PRIME DATA".to_string()],
        coordinates: Coordinates {
            lat: 32.7767,
            lng: -96.7970,
        },
        unlocked: false,
    }
}

/// A community placed at (lat, lng).
pub fn at(id: &str, lat: f64, lng: f64) -> Community {
    Community {
        coordinates: Coordinates { lat, lng },
        ..community(id, "Lennar", "2024-01-10")
    }
}

/// The four demo communities the dashboard ships with.
pub fn mock_communities() -> Vec<Community> {
    let make = |id: &str,
                builder: &str,
                name: &str,
                county: &str,
                homes: u32,
                lot_size: f64,
                date_added: &str,
                status: Status,
                credits: u32,
                lat: f64,
                lng: f64| Community {
        id: id.to_string(),
        builder: Builder {
            name: builder.to_string(),
            logo: format!("images/{id}.png"),
        },
        location: Location {
            name: name.to_string(),
            county: county.to_string(),
            state: "Texas".to_string(),
        },
        homes,
        lot_size,
        date_added: date_added.to_string(),
        status,
        credits_required: credits,
        pricing_factors: vec![format!("{status} DATA")],
        coordinates: Coordinates { lat, lng },
        unlocked: false,
    };

    vec![
        make("1", "D.R. Horton", "Sunset Meadows", "Dallas County", 200, 0.25, "2024-01-15", Status::Prime, 5, 32.7767, -96.7970),
        make("2", "Lennar", "Oak Ridge Estates", "Harris County", 150, 0.3, "2024-01-10", Status::Recent, 3, 29.7604, -95.3698),
        make("3", "PulteGroup", "Riverside Gardens", "Travis County", 180, 0.22, "2024-01-05", Status::Aged, 2, 30.2672, -97.7431),
        make("4", "KB Home", "Mountain View", "Tarrant County", 120, 0.35, "2023-12-20", Status::Archived, 1, 32.7555, -97.3308),
    ]
}

pub fn ids<'a>(records: &[&'a Community]) -> Vec<&'a str> {
    records.iter().map(|c| c.id.as_str()).collect()
}

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a debug-level subscriber scoped to this thread and returns
/// its result plus everything it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, capture.contents())
}
