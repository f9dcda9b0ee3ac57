use super::{WIFI_PREFIX, WifiCredentials};
use crate::codec::escape::{WIFI_RESERVED, escape_reserved};

pub(super) fn build_wifi_string(wifi: &WifiCredentials) -> String {
    let mut out = String::from(WIFI_PREFIX);

    push_field(&mut out, "T", wifi.security.as_token());
    push_field(&mut out, "S", &escape_reserved(&wifi.ssid, WIFI_RESERVED));
    if let Some(password) = wifi.password.as_deref().filter(|p| !p.is_empty()) {
        push_field(&mut out, "P", &escape_reserved(password, WIFI_RESERVED));
    }
    if wifi.hidden {
        push_field(&mut out, "H", "true");
    }

    out.push(';');
    out
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push(':');
    out.push_str(value);
    out.push(';');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::wifi::SecurityType;

    #[test]
    fn builds_wpa_network() {
        let wifi = WifiCredentials::new(
            "MyNetwork",
            Some("password123".to_string()),
            SecurityType::Wpa,
        )
        .unwrap();
        assert_eq!(
            build_wifi_string(&wifi),
            "WIFI:T:WPA;S:MyNetwork;P:password123;;"
        );
    }

    #[test]
    fn builds_open_hidden_network() {
        let wifi = WifiCredentials::new("Lobby", None, SecurityType::Open)
            .unwrap()
            .hidden(true);
        assert_eq!(build_wifi_string(&wifi), "WIFI:T:nopass;S:Lobby;H:true;;");
    }

    #[test]
    fn escapes_reserved_characters() {
        let wifi = WifiCredentials::new(
            "My;Network",
            Some(r#"p"a:s,s\"#.to_string()),
            SecurityType::Wpa,
        )
        .unwrap();
        assert_eq!(
            build_wifi_string(&wifi),
            r#"WIFI:T:WPA;S:My\;Network;P:p\"a\:s\,s\\;;"#
        );
    }
}
