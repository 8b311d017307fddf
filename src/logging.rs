//! # Log Sink
//!
//! Handlers that log one `info` line per decoded record. Lines that do not
//! decode are left to the dispatcher's unhandled handler, which logs them at
//! `debug` level unless replaced.

use std::fmt::{self, Display};

use tracing::info;

use crate::{Dispatcher, GGA, GLL, GSA, GST, GSV, RMC, VTG, ZDA};

/// Displays an absent value as `-`.
struct Field<'a, T>(&'a Option<T>);

impl<T: Display> Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("-"),
        }
    }
}

/// Displays a zone offset as `UTC+hh:mm`, or `-` when absent.
struct Offset(Option<time::UtcOffset>);

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(offset) = self.0 else {
            return f.write_str("-");
        };

        let sign = if offset.is_negative() { '-' } else { '+' };
        write!(
            f,
            "UTC{}{:02}:{:02}",
            sign,
            offset.whole_hours().unsigned_abs(),
            offset.minutes_past_hour().unsigned_abs()
        )
    }
}

fn log_rmc(rmc: &RMC) {
    info!(target: "nmea",
        "RMC: coordinates and speed: ({},{}) {} knots",
        Field(&rmc.latitude),
        Field(&rmc.longitude),
        Field(&rmc.speed_over_ground)
    );
}

fn log_zda(zda: &ZDA) {
    info!(target: "nmea",
        "ZDA: {} {} {}",
        Field(&zda.time),
        Field(&zda.date),
        Offset(zda.utc_offset())
    );
}

fn log_gga(gga: &GGA) {
    info!(target: "nmea",
        "GGA: fix quality: {}",
        Field(&gga.fix_quality.map(|quality| quality.value()))
    );
}

fn log_vtg(vtg: &VTG) {
    info!(target: "nmea",
        "VTG: degrees and speed: {} true, {} mag, {} knots, {} kph",
        Field(&vtg.true_track),
        Field(&vtg.magnetic_track),
        Field(&vtg.speed_knots),
        Field(&vtg.speed_kph)
    );
}

fn log_gsv(gsv: &GSV) {
    info!(target: "nmea", "GSV: message {} of {}", gsv.message_number, gsv.total_messages);
    info!(target: "nmea", "GSV: satellites in view: {}", gsv.satellites_in_view);

    for satellite in &gsv.satellites {
        info!(target: "nmea",
            "GSV: #{}, elevation: {}, azimuth: {}, snr: {} dB-Hz",
            satellite.prn,
            Field(&satellite.elevation),
            Field(&satellite.azimuth),
            Field(&satellite.snr)
        );
    }
}

fn log_gst(gst: &GST) {
    info!(target: "nmea",
        "GST: {} rms {}, deviation lat {} lon {} alt {}",
        Field(&gst.time),
        Field(&gst.rms_deviation),
        Field(&gst.latitude_error),
        Field(&gst.longitude_error),
        Field(&gst.altitude_error)
    );
}

fn log_gll(gll: &GLL) {
    info!(target: "nmea",
        "GLL: coordinates: ({},{}) at {}, {}",
        Field(&gll.latitude),
        Field(&gll.longitude),
        Field(&gll.fix_time),
        if gll.is_valid() { "valid" } else { "invalid" }
    );
}

fn log_gsa(gsa: &GSA) {
    info!(target: "nmea",
        "GSA: fix type {}, satellites {:?}, dop {} / {} / {}",
        Field(&gsa.fix_type.map(|fix_type| fix_type.as_char())),
        gsa.satellites.as_slice(),
        Field(&gsa.pdop),
        Field(&gsa.hdop),
        Field(&gsa.vdop)
    );
}

/// Registers a logging handler for every supported sentence.
///
/// ```rust
/// use nmea0183_reader::{Config, Dispatcher, Outcome, logging::log_sentences};
///
/// let mut dispatcher = log_sentences(Dispatcher::new(Config::default()));
/// let outcome = dispatcher.dispatch("$GPVTG,054.7,T,034.4,M,005.5,N,010.2,K*48");
/// assert!(matches!(outcome, Outcome::Dispatched(_)));
/// ```
pub fn log_sentences(dispatcher: Dispatcher<'_>) -> Dispatcher<'_> {
    dispatcher
        .on::<RMC>(log_rmc)
        .on::<ZDA>(log_zda)
        .on::<GGA>(log_gga)
        .on::<VTG>(log_vtg)
        .on::<GSV>(log_gsv)
        .on::<GST>(log_gst)
        .on::<GLL>(log_gll)
        .on::<GSA>(log_gsa)
}
