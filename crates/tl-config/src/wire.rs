//! Index-keyed wire transport.
//!
//! Each record group arrives as a JSON object whose keys are decimal ordinals
//! and whose values are strings, e.g. `{"0": "10", "1": "10", ...}`. This
//! module is the only place that knows which ordinal maps to which named
//! field; everything downstream works with the typed records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tl_core::Real;

use crate::error::{ConfigError, ConfigResult};
use crate::records::{
    DentRecord, EhlResultRecord, LubRecord, Rheology, RollerRecord, SysRecord, Toggle,
};

/// One record group in transport form.
pub type WireRecord = BTreeMap<String, String>;

/// The full process input payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CasePayload {
    #[serde(rename = "RollerData")]
    pub roller_data: WireRecord,
    #[serde(rename = "DentData")]
    pub dent_data: WireRecord,
    #[serde(rename = "LubData")]
    pub lub_data: WireRecord,
    #[serde(rename = "SysData")]
    pub sys_data: WireRecord,
    #[serde(rename = "EHLres")]
    pub ehl_res: WireRecord,
}

/// Fully decoded configuration for one command execution.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseInput {
    pub roller: RollerRecord,
    pub dent: DentRecord,
    pub sys: SysRecord,
    pub lub: LubRecord,
    pub ehl: EhlResultRecord,
}

impl CasePayload {
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode and validate every record group.
    ///
    /// Any violation (wrong field count, missing ordinal, unparseable numeric
    /// content, unknown tag) fails here, before a solver call can be built.
    pub fn decode(&self) -> ConfigResult<CaseInput> {
        Ok(CaseInput {
            roller: decode_roller(&self.roller_data)?,
            dent: decode_dent(&self.dent_data)?,
            sys: decode_sys(&self.sys_data)?,
            lub: decode_lub(&self.lub_data)?,
            ehl: decode_ehl(&self.ehl_res)?,
        })
    }

    /// Write solver-refined domain sizes into the System wire record
    /// (ordinals 2 and 3). Values arrive pre-formatted.
    pub fn apply_sys_update(&mut self, domain_x: String, domain_y: String) {
        self.sys_data.insert("2".to_string(), domain_x);
        self.sys_data.insert("3".to_string(), domain_y);
    }

    /// Write EHL scalar results into the EHLres wire record. Values arrive
    /// pre-formatted.
    pub fn apply_ehl_update(&mut self, values: [String; 3]) {
        for (index, value) in values.into_iter().enumerate() {
            self.ehl_res.insert(index.to_string(), value);
        }
    }
}

/// Ordinal-addressed view over one wire record.
struct RecordReader<'a> {
    record: &'static str,
    map: &'a WireRecord,
}

impl<'a> RecordReader<'a> {
    fn new(record: &'static str, map: &'a WireRecord, expected: usize) -> ConfigResult<Self> {
        if map.len() != expected {
            return Err(ConfigError::FieldCount {
                record,
                expected,
                actual: map.len(),
            });
        }
        Ok(Self { record, map })
    }

    fn text(&self, index: usize) -> ConfigResult<&'a str> {
        self.map
            .get(&index.to_string())
            .map(String::as_str)
            .ok_or(ConfigError::MissingField {
                record: self.record,
                index,
            })
    }

    fn owned(&self, index: usize) -> ConfigResult<String> {
        self.text(index).map(str::to_string)
    }

    fn num(&self, index: usize) -> ConfigResult<Real> {
        let raw = self.text(index)?;
        raw.trim().parse().map_err(|_| ConfigError::NotNumeric {
            record: self.record,
            index,
            value: raw.to_string(),
        })
    }

    /// Optional numeric field: an empty value decodes as `None`.
    fn num_opt(&self, index: usize) -> ConfigResult<Option<Real>> {
        let raw = self.text(index)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        self.num(index).map(Some)
    }

    fn count(&self, index: usize) -> ConfigResult<u32> {
        let raw = self.text(index)?;
        raw.trim().parse().map_err(|_| ConfigError::NotCount {
            record: self.record,
            index,
            value: raw.to_string(),
        })
    }

    fn toggle(&self, index: usize) -> ConfigResult<Toggle> {
        let raw = self.text(index)?;
        Toggle::from_tag(raw.trim()).ok_or_else(|| ConfigError::UnknownTag {
            record: self.record,
            index,
            value: raw.to_string(),
        })
    }

    fn rheology(&self, index: usize) -> ConfigResult<Rheology> {
        let raw = self.text(index)?;
        Rheology::from_tag(raw.trim()).ok_or_else(|| ConfigError::UnknownTag {
            record: self.record,
            index,
            value: raw.to_string(),
        })
    }
}

fn decode_roller(map: &WireRecord) -> ConfigResult<RollerRecord> {
    let r = RecordReader::new("Roller", map, RollerRecord::FIELDS)?;
    Ok(RollerRecord {
        radius_1: r.num(0)?,
        radius_2: r.num(1)?,
        length_1: r.num(2)?,
        crown_radius_1: r.num(3)?,
        length_2: r.num(4)?,
        crown_radius_2: r.num(5)?,
        elastic_modulus_1: r.num(6)?,
        elastic_modulus_2: r.num(7)?,
        poisson_ratio_1: r.num(8)?,
        poisson_ratio_2: r.num(9)?,
        density_1: r.num(10)?,
        density_2: r.num(11)?,
        specific_heat_1: r.num(12)?,
        specific_heat_2: r.num(13)?,
        conductivity_1: r.num(14)?,
        conductivity_2: r.num(15)?,
        thermal_expansion_1: r.num(16)?,
        thermal_expansion_2: r.num(17)?,
        bulk_temperature_1: r.num(18)?,
        bulk_temperature_2: r.num(19)?,
        roughness_rms_1: r.num(20)?,
        roughness_wavelength_1: r.num(21)?,
        roughness_rms_2: r.num(22)?,
        roughness_wavelength_2: r.num(23)?,
        hardness_1: r.num(24)?,
        hardness_2: r.num(25)?,
        contact_kind: r.owned(26)?,
        note_1: r.owned(27)?,
        note_2: r.owned(28)?,
    })
}

fn decode_dent(map: &WireRecord) -> ConfigResult<DentRecord> {
    let r = RecordReader::new("Dent", map, DentRecord::FIELDS)?;
    Ok(DentRecord {
        defect_kind: r.owned(0)?,
        depth: r.num_opt(1)?,
        diameter: r.num_opt(2)?,
        shoulder_height: r.num_opt(3)?,
        position_x: r.num_opt(4)?,
        position_y: r.num_opt(5)?,
        profile: r.owned(6)?,
        note: r.owned(7)?,
    })
}

fn decode_sys(map: &WireRecord) -> ConfigResult<SysRecord> {
    let r = RecordReader::new("Sys", map, SysRecord::FIELDS)?;
    Ok(SysRecord {
        slide_to_roll: r.num(0)?,
        rolling_velocity: r.num(1)?,
        domain_x: r.num(2)?,
        domain_y: r.num(3)?,
        grid_nx: r.count(4)?,
        grid_ny: r.count(5)?,
        grid_nz: r.count(6)?,
        inlet_factor: r.num(7)?,
        outlet_factor: r.num(8)?,
        depth_factor: r.num(9)?,
        friction_model: r.owned(10)?,
        shear_output: r.toggle(11)?,
        thermal_coupling: r.toggle(12)?,
        save_intermediate: r.toggle(13)?,
        run_tag: r.owned(14)?,
        pressure_tol: r.num(15)?,
        relaxation: r.num(16)?,
        load_tol: r.num(17)?,
        max_inner_iter: r.num(18)?,
        max_outer_iter: r.num(19)?,
    })
}

fn decode_lub(map: &WireRecord) -> ConfigResult<LubRecord> {
    let r = RecordReader::new("Lub", map, LubRecord::FIELDS)?;
    Ok(LubRecord {
        rheology: r.rheology(0)?,
        supply: r.owned(1)?,
        ref_temp_low: r.num(2)?,
        ref_temp_high: r.num(3)?,
        viscosity_low: r.num(4)?,
        viscosity_high: r.num(5)?,
        pv_coeff_low: r.num(6)?,
        pv_coeff_high: r.num(7)?,
        shear_modulus_1: r.num_opt(8)?,
        shear_modulus_2: r.num_opt(9)?,
        power_law_index: r.num_opt(10)?,
        limit_shear_ratio: r.num_opt(11)?,
        temp_visc_coeff: r.num(12)?,
        specific_heat: r.num(13)?,
        conductivity: r.num(14)?,
        density: r.num(15)?,
        expansivity: r.num(16)?,
        sweep_pressure_lo: r.num(17)?,
        sweep_pressure_hi: r.num(18)?,
        sweep_levels: r.count(19)?,
    })
}

fn decode_ehl(map: &WireRecord) -> ConfigResult<EhlResultRecord> {
    let r = RecordReader::new("EHLres", map, EhlResultRecord::FIELDS)?;
    Ok(EhlResultRecord {
        friction_coefficient: r.num_opt(0)?,
        film_force: r.num_opt(1)?,
        aspect_ratio: r.num_opt(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(values: &[&str]) -> WireRecord {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.to_string()))
            .collect()
    }

    pub(crate) fn sample_payload() -> CasePayload {
        CasePayload {
            roller_data: wire(&[
                "10", "10", "20", "2.0e9", "20", "2.0e9", "206000", "206000", "0.3", "0.3",
                "7850", "7850", "460", "460", "47", "47", "1.17e-5", "1.17e-5", "40", "40", "2.2",
                "1.8", "2.2", "1.8", "2.0e9", "2.0e9", "C", "", "",
            ]),
            dent_data: wire(&["NoDent", "", "", "", "", "", "", ""]),
            lub_data: wire(&[
                "Nw", "N", "40", "100", "0.1749", "0.01742", "2.273e-8", "1.614e-8", "", "", "",
                "", "0.0411", "1880", "0.14", "890", "6.4e-4", "300", "1500", "5",
            ]),
            sys_data: wire(&[
                "0", "0.15", "5720", "0", "128", "64", "32", "2.5", "1.5", "3", "F", "N", "N",
                "N", "filename", "0.1", "0.0", "3.0", "200", "500",
            ]),
            ehl_res: wire(&["", "", ""]),
        }
    }

    #[test]
    fn decodes_full_sample_payload() {
        let input = sample_payload().decode().unwrap();

        assert_eq!(input.roller.radius_1, 10.0);
        assert_eq!(input.roller.elastic_modulus_2, 206000.0);
        assert_eq!(input.roller.contact_kind, "C");
        assert_eq!(input.dent.defect_kind, "NoDent");
        assert_eq!(input.sys.grid_nx, 128);
        assert_eq!(input.sys.shear_output, Toggle::No);
        assert_eq!(input.lub.rheology, Rheology::Newtonian);
        assert_eq!(input.lub.sweep_levels, 5);
        assert_eq!(input.ehl.friction_coefficient, None);
    }

    #[test]
    fn empty_optionals_decode_as_none() {
        let input = sample_payload().decode().unwrap();

        assert_eq!(input.dent.depth, None);
        assert_eq!(input.dent.position_y, None);
        assert_eq!(input.lub.shear_modulus_1, None);
        assert_eq!(input.lub.limit_shear_ratio, None);
    }

    #[test]
    fn present_optionals_decode_to_parsed_value() {
        let mut payload = sample_payload();
        payload.dent_data.insert("1".to_string(), "2.5".to_string());
        payload.lub_data.insert("10".to_string(), "0.6".to_string());

        let input = payload.decode().unwrap();
        assert_eq!(input.dent.depth, Some(2.5));
        assert_eq!(input.lub.power_law_index, Some(0.6));
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut payload = sample_payload();
        payload.roller_data.remove("28");

        let err = payload.decode().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FieldCount {
                record: "Roller",
                expected: 29,
                actual: 28,
            }
        ));
    }

    #[test]
    fn non_contiguous_ordinals_are_rejected() {
        let mut payload = sample_payload();
        payload.dent_data.remove("3");
        payload.dent_data.insert("9".to_string(), "x".to_string());

        let err = payload.decode().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                record: "Dent",
                index: 3,
            }
        ));
    }

    #[test]
    fn non_numeric_content_is_rejected() {
        let mut payload = sample_payload();
        payload.roller_data.insert("6".to_string(), "steel".to_string());

        let err = payload.decode().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotNumeric {
                record: "Roller",
                index: 6,
                ..
            }
        ));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let mut payload = sample_payload();
        payload.lub_data.insert("0".to_string(), "Herschel".to_string());
        assert!(matches!(
            payload.decode().unwrap_err(),
            ConfigError::UnknownTag { record: "Lub", index: 0, .. }
        ));

        let mut payload = sample_payload();
        payload.sys_data.insert("11".to_string(), "maybe".to_string());
        assert!(matches!(
            payload.decode().unwrap_err(),
            ConfigError::UnknownTag { record: "Sys", index: 11, .. }
        ));
    }

    #[test]
    fn payload_missing_a_record_group_fails_to_parse() {
        let mut value: serde_json::Value =
            serde_json::from_str(&sample_payload().to_json().unwrap()).unwrap();
        value.as_object_mut().unwrap().remove("LubData");

        let err = CasePayload::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::Payload(_)));
    }

    #[test]
    fn write_back_replaces_wire_values() {
        let mut payload = sample_payload();
        payload.apply_sys_update("5720.3".to_string(), "12.7".to_string());
        payload.apply_ehl_update(["0.042".to_string(), "1.250".to_string(), "0.85".to_string()]);

        assert_eq!(payload.sys_data["2"], "5720.3");
        assert_eq!(payload.sys_data["3"], "12.7");
        assert_eq!(payload.ehl_res["0"], "0.042");
        assert_eq!(payload.ehl_res["2"], "0.85");
        // Everything else untouched
        assert_eq!(payload.sys_data["4"], "128");
    }
}
