//! Human-readable snapshot output

use std::fmt::Write;

use onvif_sdk::{RefreshReport, Snapshot};

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let info = &snapshot.information;

    // Writing to a String cannot fail
    let _ = writeln!(out, "Device      {} {}", or_dash(&info.manufacturer), or_dash(&info.model));
    let _ = writeln!(out, "Firmware    {}", or_dash(&info.firmware_version));
    let _ = writeln!(out, "Serial      {}", or_dash(&info.serial_number));
    let _ = writeln!(
        out,
        "Scopes      name={} location={}",
        or_dash(&snapshot.scopes.name),
        or_dash(&snapshot.scopes.location)
    );

    if let Some(utc) = snapshot.date_time.utc {
        let source = if snapshot.date_time.ntp { "NTP" } else { "manual" };
        let _ = writeln!(out, "Clock       {} ({})", utc.format("%Y-%m-%d %H:%M:%S UTC"), source);
    }

    if let Some(iface) = snapshot.network.primary() {
        let address = iface
            .ipv4_manual
            .first()
            .or(iface.ipv4_from_dhcp.as_ref())
            .map(|a| format!("{}/{}", a.address, a.prefix_length))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "Network     {} {} {} Mb/s {:?}",
            or_dash(&iface.name),
            address,
            iface.speed,
            iface.duplex
        );
    }

    let _ = writeln!(out, "Profiles    {}", snapshot.profiles.len());
    for profile in &snapshot.profiles {
        let resolution = profile
            .video_encoder
            .as_ref()
            .map(|e| format!("{:?} {}x{}", e.codec, e.width, e.height))
            .unwrap_or_else(|| "no video".to_string());
        let ptz = if profile.ptz.is_some() { " ptz" } else { "" };
        let _ = writeln!(out, "  {:<12} {:<20} {}{}", profile.token, profile.name, resolution, ptz);
    }

    let stream = &snapshot.media.video.stream_uri;
    let _ = writeln!(out, "Stream      {}", or_dash(&stream.uri));
    let _ = writeln!(
        out,
        "PTZ         {}",
        if snapshot.capabilities.supports_ptz() { "yes" } else { "no" }
    );

    out
}

pub fn render_failures(report: &RefreshReport) -> String {
    let mut out = String::new();
    if report.is_complete() {
        return out;
    }

    let _ = writeln!(out, "Not refreshed:");
    for (area, error) in &report.failed {
        let _ = writeln!(out, "  {:<22} {}", area.name(), error);
    }
    out
}
