// crates/citygeo-core/src/remote/timezone.rs

//! Timezone inference for provider results, which never carry one.
//!
//! A country code maps to the zone of its most populous area. Countries
//! spanning several zones get a single representative entry, which is fine
//! for seeding prayer times but not for anything finer.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// ISO2 code → representative IANA zone.
static COUNTRY_TIMEZONES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        // Gulf & Arabian peninsula
        ("SA", "Asia/Riyadh"),
        ("AE", "Asia/Dubai"),
        ("QA", "Asia/Qatar"),
        ("KW", "Asia/Kuwait"),
        ("BH", "Asia/Bahrain"),
        ("OM", "Asia/Muscat"),
        ("YE", "Asia/Aden"),
        // Levant, Iraq, Iran, Turkey
        ("JO", "Asia/Amman"),
        ("PS", "Asia/Gaza"),
        ("IL", "Asia/Jerusalem"),
        ("SY", "Asia/Damascus"),
        ("LB", "Asia/Beirut"),
        ("IQ", "Asia/Baghdad"),
        ("IR", "Asia/Tehran"),
        ("TR", "Europe/Istanbul"),
        ("CY", "Asia/Nicosia"),
        // North Africa
        ("EG", "Africa/Cairo"),
        ("LY", "Africa/Tripoli"),
        ("TN", "Africa/Tunis"),
        ("DZ", "Africa/Algiers"),
        ("MA", "Africa/Casablanca"),
        ("MR", "Africa/Nouakchott"),
        ("SD", "Africa/Khartoum"),
        // Sub-Saharan Africa
        ("SN", "Africa/Dakar"),
        ("GM", "Africa/Banjul"),
        ("GN", "Africa/Conakry"),
        ("ML", "Africa/Bamako"),
        ("NE", "Africa/Niamey"),
        ("TD", "Africa/Ndjamena"),
        ("NG", "Africa/Lagos"),
        ("CM", "Africa/Douala"),
        ("SO", "Africa/Mogadishu"),
        ("DJ", "Africa/Djibouti"),
        ("ER", "Africa/Asmara"),
        ("ET", "Africa/Addis_Ababa"),
        ("KE", "Africa/Nairobi"),
        ("TZ", "Africa/Dar_es_Salaam"),
        ("UG", "Africa/Kampala"),
        ("GH", "Africa/Accra"),
        ("CI", "Africa/Abidjan"),
        ("BF", "Africa/Ouagadougou"),
        ("ZA", "Africa/Johannesburg"),
        // Central & South Asia
        ("PK", "Asia/Karachi"),
        ("AF", "Asia/Kabul"),
        ("IN", "Asia/Kolkata"),
        ("BD", "Asia/Dhaka"),
        ("LK", "Asia/Colombo"),
        ("MV", "Indian/Maldives"),
        ("NP", "Asia/Kathmandu"),
        ("UZ", "Asia/Tashkent"),
        ("KZ", "Asia/Almaty"),
        ("KG", "Asia/Bishkek"),
        ("TJ", "Asia/Dushanbe"),
        ("TM", "Asia/Ashgabat"),
        ("AZ", "Asia/Baku"),
        // South-East & East Asia
        ("ID", "Asia/Jakarta"),
        ("MY", "Asia/Kuala_Lumpur"),
        ("SG", "Asia/Singapore"),
        ("BN", "Asia/Brunei"),
        ("TH", "Asia/Bangkok"),
        ("PH", "Asia/Manila"),
        ("MM", "Asia/Yangon"),
        ("VN", "Asia/Ho_Chi_Minh"),
        ("CN", "Asia/Shanghai"),
        ("HK", "Asia/Hong_Kong"),
        ("JP", "Asia/Tokyo"),
        ("KR", "Asia/Seoul"),
        // Europe
        ("GB", "Europe/London"),
        ("IE", "Europe/Dublin"),
        ("FR", "Europe/Paris"),
        ("DE", "Europe/Berlin"),
        ("NL", "Europe/Amsterdam"),
        ("BE", "Europe/Brussels"),
        ("CH", "Europe/Zurich"),
        ("AT", "Europe/Vienna"),
        ("IT", "Europe/Rome"),
        ("ES", "Europe/Madrid"),
        ("PT", "Europe/Lisbon"),
        ("SE", "Europe/Stockholm"),
        ("NO", "Europe/Oslo"),
        ("DK", "Europe/Copenhagen"),
        ("FI", "Europe/Helsinki"),
        ("PL", "Europe/Warsaw"),
        ("GR", "Europe/Athens"),
        ("BA", "Europe/Sarajevo"),
        ("AL", "Europe/Tirane"),
        ("XK", "Europe/Belgrade"),
        ("RS", "Europe/Belgrade"),
        ("MK", "Europe/Skopje"),
        ("BG", "Europe/Sofia"),
        ("RO", "Europe/Bucharest"),
        ("UA", "Europe/Kyiv"),
        ("RU", "Europe/Moscow"),
        // Americas & Oceania
        ("US", "America/New_York"),
        ("CA", "America/Toronto"),
        ("MX", "America/Mexico_City"),
        ("BR", "America/Sao_Paulo"),
        ("AR", "America/Argentina/Buenos_Aires"),
        ("CO", "America/Bogota"),
        ("TT", "America/Port_of_Spain"),
        ("GY", "America/Guyana"),
        ("SR", "America/Paramaribo"),
        ("AU", "Australia/Sydney"),
        ("NZ", "Pacific/Auckland"),
        ("FJ", "Pacific/Fiji"),
    ]
    .into_iter()
    .collect()
});

/// Zone for a two-letter country code, case-insensitive.
pub fn timezone_for_country(code: &str) -> Option<&'static str> {
    let code = code.trim();
    if code.len() != 2 {
        return None;
    }
    COUNTRY_TIMEZONES
        .get(code.to_ascii_uppercase().as_str())
        .copied()
}

/// Whole-hour UTC offset approximated from longitude (15° per hour).
///
/// Half-hour ties round up, toward positive infinity: 22.5° is +2 and
/// -22.5° is -1.
pub fn offset_hours_from_longitude(longitude: f64) -> i32 {
    (longitude / 15.0 + 0.5).floor() as i32
}

/// Fixed-offset zone name for a whole-hour UTC offset.
///
/// Uses the IANA `Etc/GMT` convention, whose sign is inverted:
/// UTC+3 is `Etc/GMT-3`.
///
/// ```rust
/// use citygeo_core::remote::timezone::fixed_offset_zone;
///
/// assert_eq!(fixed_offset_zone(3), "Etc/GMT-3");
/// assert_eq!(fixed_offset_zone(-5), "Etc/GMT+5");
/// assert_eq!(fixed_offset_zone(0), "Etc/GMT");
/// ```
pub fn fixed_offset_zone(offset_hours: i32) -> String {
    match offset_hours {
        0 => "Etc/GMT".to_string(),
        h if h > 0 => format!("Etc/GMT-{h}"),
        h => format!("Etc/GMT+{}", -h),
    }
}

/// Country table first, then the coarse longitude approximation (no DST,
/// no half-hour zones).
pub fn infer_timezone(country_code: &str, longitude: f64) -> String {
    match timezone_for_country(country_code) {
        Some(tz) => tz.to_string(),
        None => fixed_offset_zone(offset_hours_from_longitude(longitude)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_use_the_table() {
        assert_eq!(timezone_for_country("SA"), Some("Asia/Riyadh"));
        assert_eq!(timezone_for_country("id"), Some("Asia/Jakarta"));
        assert_eq!(infer_timezone("eg", 99.0), "Africa/Cairo");
    }

    #[test]
    fn unknown_or_missing_code_falls_back_to_longitude() {
        assert_eq!(infer_timezone("", 35.0), "Etc/GMT-2");
        assert_eq!(infer_timezone("ZZ", -74.0), "Etc/GMT+5");
        assert_eq!(infer_timezone("USA", 7.0), "Etc/GMT");
    }

    #[test]
    fn longitude_rounds_to_nearest_hour() {
        assert_eq!(offset_hours_from_longitude(22.4), 1);
        assert_eq!(offset_hours_from_longitude(22.5), 2);
        assert_eq!(offset_hours_from_longitude(-179.9), -12);
        assert_eq!(offset_hours_from_longitude(180.0), 12);
    }

    #[test]
    fn half_hour_ties_round_up() {
        assert_eq!(offset_hours_from_longitude(-22.5), -1);
        assert_eq!(offset_hours_from_longitude(-7.5), 0);
        assert_eq!(infer_timezone("", -22.5), "Etc/GMT+1");
        assert_eq!(infer_timezone("", 22.5), "Etc/GMT-2");
    }
}
