//! Canned records resembling a typical home setup.

use wpactl_core::{AccessPoint, MacAddr, Network, Ssid};

/// Four configured networks, the first one current.
pub fn networks() -> Vec<Network> {
    vec![
        Network {
            id: 0,
            ssid: "HomeNet".into(),
            bssid: "00:11:22:33:44:55".into(),
            flags: ["CURRENT", "PSK"].into_iter().collect(),
        },
        Network {
            id: 1,
            ssid: "Office".into(),
            bssid: "any".into(),
            flags: ["DISABLED"].into_iter().collect(),
        },
        Network {
            id: 2,
            ssid: Ssid::new(),
            bssid: "any".into(),
            flags: ["TEMP-DISABLED"].into_iter().collect(),
        },
        Network {
            id: 3,
            ssid: "Guest".into(),
            bssid: "any".into(),
            flags: Default::default(),
        },
    ]
}

/// Three access points across the 2.4 and 5 GHz bands.
pub fn access_points() -> Vec<AccessPoint> {
    vec![
        AccessPoint {
            bssid: MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]),
            ssid: "CafeWifi".into(),
            frequency: 2412,
            signal: -45,
            flags: ["WPA2-PSK-CCMP", "ESS"].into_iter().collect(),
        },
        AccessPoint {
            bssid: MacAddr::new([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]),
            ssid: "HomeNet".into(),
            frequency: 5180,
            signal: -61,
            flags: ["WPA2-PSK-CCMP", "WPS", "ESS"].into_iter().collect(),
        },
        AccessPoint {
            bssid: MacAddr::new([0xde, 0xad, 0xbe, 0xef, 0xca, 0xfe]),
            ssid: Ssid::new(),
            frequency: 2462,
            signal: -88,
            flags: ["ESS"].into_iter().collect(),
        },
    ]
}
