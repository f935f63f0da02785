//! Serial device discovery.
//!
//! Picks the first port that looks like a USB-serial adapter or a COM port.

use serialport::{SerialPortInfo, SerialPortType};

/// Substrings of a port description that mark a usable device
const DESCRIPTION_MARKERS: [&str; 2] = ["USB", "Serial"];

/// Substrings of a port name that mark a usable device on each platform
const NAME_MARKERS: [&str; 5] = ["COM", "ttyUSB", "ttyACM", "usbserial", "usbmodem"];

/// An enumerated serial port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortCandidate {
    /// Port name (e.g. "/dev/ttyUSB0" or "COM3")
    pub name: String,
    /// Human readable description
    pub description: String,
}

impl From<SerialPortInfo> for PortCandidate {
    fn from(info: SerialPortInfo) -> Self {
        let description = match info.port_type {
            SerialPortType::UsbPort(usb) => {
                let mut parts = vec!["USB".to_string()];
                parts.extend(usb.manufacturer);
                parts.extend(usb.product);
                parts.join(" ")
            }
            SerialPortType::PciPort => "PCI Serial".to_string(),
            SerialPortType::BluetoothPort => "Bluetooth".to_string(),
            SerialPortType::Unknown => "n/a".to_string(),
        };

        Self {
            name: info.port_name,
            description,
        }
    }
}

impl PortCandidate {
    pub fn is_recognized(&self) -> bool {
        DESCRIPTION_MARKERS.iter().any(|m| self.description.contains(m))
            || NAME_MARKERS.iter().any(|m| self.name.contains(m))
    }
}

/// First recognized port in enumeration order
pub fn select_port(candidates: &[PortCandidate]) -> Option<&PortCandidate> {
    candidates.iter().find(|c| c.is_recognized())
}

/// Enumerate the system's serial ports
pub fn list_ports() -> Vec<PortCandidate> {
    match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(PortCandidate::from).collect(),
        Err(e) => {
            tracing::warn!("Serial port enumeration failed: {}", e);
            Vec::new()
        }
    }
}

/// Name of the port to connect to, if any
pub fn find_serial_port() -> Option<String> {
    let candidates = list_ports();
    tracing::debug!("Found {} serial port(s)", candidates.len());
    select_port(&candidates).map(|c| c.name.clone())
}
