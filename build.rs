use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-env-changed=TIMERELAY_TZ_OFFSET_MIN");
    println!("cargo:rerun-if-changed=src");

    // The firmware sets the RTC to the build time on every boot, so bake
    // the current wall-clock time into the binary. The RTC keeps local
    // time; shift UTC by the configured offset (minutes east of UTC).
    let utc_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let offset_min: i64 = match std::env::var("TIMERELAY_TZ_OFFSET_MIN") {
        Ok(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                println!("cargo:warning=TIMERELAY_TZ_OFFSET_MIN='{raw}' is not an integer, using 0");
                0
            }
        },
        Err(_) => 0,
    };

    let local_secs = (utc_secs as i64 + offset_min * 60).max(0);
    println!("cargo:rustc-env=TIMERELAY_BUILD_UNIX_SECS={local_secs}");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
