use chrono::Utc;
use jdcal::{CivilMoment, JulianDate, MomentError, TemporalCalendar};

fn main() -> Result<(), MomentError> {
    let now_jd = JulianDate::from_utc(Utc::now());
    let now = CivilMoment::from_julian_date(now_jd)?;

    println!("{now_jd}");
    println!("JDN: {} ({:?})", now_jd.to_jdn(), now_jd.to_jdn().weekday());
    println!("Gregorian: {now}");
    println!("Julian:    {}", now.to_calendar(TemporalCalendar::Julian)?);
    println!("MJD: {}", now_jd.to_mjd());
    Ok(())
}
