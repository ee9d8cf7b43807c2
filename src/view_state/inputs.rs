//! Draft input held by each screen before submission.

use std::fmt::Debug;

/// Draft values a screen collects before the user submits.
///
/// Every field is a plain string: the value is stored exactly as typed and
/// validated by nobody but the server.
pub trait PendingInput: Default + Clone + Debug {
    /// Identifies one editable field of the input.
    type Field: Copy + Eq + Debug + 'static;

    fn field(&self, field: Self::Field) -> &str;

    fn field_mut(&mut self, field: Self::Field) -> &mut String;

    /// Editable fields in focus order.
    fn fields() -> &'static [Self::Field];

    /// Field after `current` in focus order, wrapping around.
    fn next_field(current: Self::Field) -> Self::Field {
        let fields = Self::fields();
        match fields.iter().position(|f| *f == current) {
            Some(idx) => fields[(idx + 1) % fields.len()],
            None => current,
        }
    }

    /// Field before `current` in focus order, wrapping around.
    fn prev_field(current: Self::Field) -> Self::Field {
        let fields = Self::fields();
        match fields.iter().position(|f| *f == current) {
            Some(idx) => fields[(idx + fields.len() - 1) % fields.len()],
            None => current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatField {
    Text,
}

/// Threat-detection draft: the suspicious message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatInput {
    pub text: String,
}

impl PendingInput for ThreatInput {
    type Field = ThreatField;

    fn field(&self, field: ThreatField) -> &str {
        match field {
            ThreatField::Text => &self.text,
        }
    }

    fn field_mut(&mut self, field: ThreatField) -> &mut String {
        match field {
            ThreatField::Text => &mut self.text,
        }
    }

    fn fields() -> &'static [ThreatField] {
        &[ThreatField::Text]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortScanField {
    Ip,
    Port,
}

/// Port-scan draft. `port` keeps the raw typed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortScanInput {
    pub ip: String,
    pub port: String,
}

impl Default for PortScanInput {
    fn default() -> Self {
        Self {
            ip: String::new(),
            port: "80".to_string(),
        }
    }
}

impl PendingInput for PortScanInput {
    type Field = PortScanField;

    fn field(&self, field: PortScanField) -> &str {
        match field {
            PortScanField::Ip => &self.ip,
            PortScanField::Port => &self.port,
        }
    }

    fn field_mut(&mut self, field: PortScanField) -> &mut String {
        match field {
            PortScanField::Ip => &mut self.ip,
            PortScanField::Port => &mut self.port,
        }
    }

    fn fields() -> &'static [PortScanField] {
        &[PortScanField::Ip, PortScanField::Port]
    }
}

/// Field type for screens without inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoField {}

/// The log screen takes no input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogsInput;

impl PendingInput for LogsInput {
    type Field = NoField;

    fn field(&self, field: NoField) -> &str {
        match field {}
    }

    fn field_mut(&mut self, field: NoField) -> &mut String {
        match field {}
    }

    fn fields() -> &'static [NoField] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_80() {
        let input = PortScanInput::default();
        assert_eq!(input.field(PortScanField::Port), "80");
        assert_eq!(input.field(PortScanField::Ip), "");
    }

    #[test]
    fn test_field_mut_writes_through() {
        let mut input = ThreatInput::default();
        input.field_mut(ThreatField::Text).push_str("seed phrase");
        assert_eq!(input.text, "seed phrase");
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        assert_eq!(PortScanInput::next_field(PortScanField::Ip), PortScanField::Port);
        assert_eq!(PortScanInput::next_field(PortScanField::Port), PortScanField::Ip);
        assert_eq!(PortScanInput::prev_field(PortScanField::Ip), PortScanField::Port);
        assert_eq!(ThreatInput::next_field(ThreatField::Text), ThreatField::Text);
    }

    #[test]
    fn test_field_order() {
        assert_eq!(PortScanInput::fields(), &[PortScanField::Ip, PortScanField::Port]);
        assert!(LogsInput::fields().is_empty());
    }
}
