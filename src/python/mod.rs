use fracem_core::constants::FUEL_TABLE;
use fracem_core::errors::FracError;
use fracem_core::job::{FracType, JobConfiguration, JobParameters};
use fracem_core::parameters::FuelMix;
use fracem_core::scenario::Scenario;
use fracem_core::FloatValue;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

fn to_py_err(e: FracError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// A single frac job
///
/// Example:
///     frac = Frac("conv", stage_time=60, num_stage=10, p=8000, q=80, t_tanks=5, t_pumps=5)
///     frac.primeMover(tbs=60, dis_fraction=1.0)
#[pyclass(frozen)]
#[pyo3(name = "Frac")]
pub struct PyFrac(JobConfiguration);

#[pymethods]
impl PyFrac {
    #[new]
    #[pyo3(signature = (frac_type, stage_time, num_stage, p, q, t_tanks, t_pumps, etta=0.9))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        frac_type: &str,
        stage_time: FloatValue,
        num_stage: u32,
        p: FloatValue,
        q: FloatValue,
        t_tanks: u32,
        t_pumps: u32,
        etta: FloatValue,
    ) -> PyResult<Self> {
        let frac_type: FracType = frac_type.parse().map_err(to_py_err)?;
        let job = JobConfiguration::new(JobParameters {
            frac_type,
            stage_time,
            num_stage,
            bottomhole_pressure: p,
            pump_rate: q,
            truck_tanks: t_tanks,
            truck_pumps: t_pumps,
            pump_efficiency: etta,
        })
        .map_err(to_py_err)?;
        Ok(Self(job))
    }

    #[getter]
    fn frac_type(&self) -> &'static str {
        self.0.frac_type().code()
    }

    /// Hydraulic horsepower
    #[getter]
    fn hhp(&self) -> FloatValue {
        self.0.horsepower_hr()
    }

    #[getter]
    fn num_pumps(&self) -> FloatValue {
        self.0.num_pumps_required()
    }

    /// Prime mover energy throughput (BTU/hr)
    #[getter]
    fn btu_hr(&self) -> FloatValue {
        self.0.btu_per_hour()
    }

    #[pyo3(name = "primeMover", signature = (tbs, dis_fraction, cng_fraction=0.0, lng_fraction=0.0, elect_fraction=0.0))]
    fn prime_mover(
        &self,
        tbs: FloatValue,
        dis_fraction: FloatValue,
        cng_fraction: FloatValue,
        lng_fraction: FloatValue,
        elect_fraction: FloatValue,
    ) -> PyResult<FloatValue> {
        let fuel_mix = FuelMix {
            diesel: dis_fraction,
            cng: cng_fraction,
            lng: lng_fraction,
            electricity: elect_fraction,
        };
        self.0.prime_mover(tbs, fuel_mix).map_err(to_py_err)
    }

    #[pyo3(name = "sandTransport")]
    fn sand_transport(
        &self,
        prop_per_stage: FloatValue,
        sand_load: FloatValue,
        dist_to_sand: FloatValue,
        truck_consumption: FloatValue,
    ) -> PyResult<FloatValue> {
        self.0
            .sand_transport(prop_per_stage, sand_load, dist_to_sand, truck_consumption)
            .map_err(to_py_err)
    }

    #[pyo3(name = "waterTransport")]
    fn water_transport(
        &self,
        water_per_stage: FloatValue,
        water_load: FloatValue,
        dist_to_water: FloatValue,
        truck_consumption: FloatValue,
    ) -> PyResult<FloatValue> {
        self.0
            .water_transport(water_per_stage, water_load, dist_to_water, truck_consumption)
            .map_err(to_py_err)
    }

    #[pyo3(name = "fuelTransport")]
    fn fuel_transport(
        &self,
        fuel_load: FloatValue,
        dist_to_fuel: FloatValue,
        truck_consumption: FloatValue,
    ) -> PyResult<FloatValue> {
        self.0
            .fuel_transport(fuel_load, dist_to_fuel, truck_consumption)
            .map_err(to_py_err)
    }

    #[pyo3(name = "mobDemob")]
    fn mob_demob(
        &self,
        mob_distance: FloatValue,
        truck_consumption: FloatValue,
    ) -> PyResult<FloatValue> {
        self.0
            .mob_demob(mob_distance, truck_consumption)
            .map_err(to_py_err)
    }

    fn land(&self) -> FloatValue {
        self.0.land()
    }

    #[pyo3(name = "sandMining")]
    fn sand_mining(
        &self,
        prop_per_stage: FloatValue,
        sand_footprint: FloatValue,
    ) -> PyResult<FloatValue> {
        self.0
            .sand_mining(prop_per_stage, sand_footprint)
            .map_err(to_py_err)
    }

    fn people(&self) -> FloatValue {
        self.0.people()
    }

    #[pyo3(name = "auxillary")]
    fn auxiliary(&self) -> FloatValue {
        self.0.auxiliary()
    }
}

fn report_to_dict(scenario: &Scenario) -> PyResult<HashMap<String, FloatValue>> {
    let report = scenario.evaluate().map_err(to_py_err)?;
    Ok(report
        .by_category()
        .into_iter()
        .map(|(category, value)| (category.name().to_string(), value))
        .collect())
}

/// Evaluate a scenario given as a dict with `job` and `sources` keys.
///
/// Returns the emissions of each category in kg CO2e.
#[pyfunction]
fn evaluate_scenario(scenario: &Bound<'_, PyAny>) -> PyResult<HashMap<String, FloatValue>> {
    let scenario = pythonize::depythonize::<Scenario>(scenario)
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    report_to_dict(&scenario)
}

/// Evaluate a scenario written as a TOML document.
#[pyfunction]
fn evaluate_scenario_toml(document: &str) -> PyResult<HashMap<String, FloatValue>> {
    let scenario = Scenario::from_toml_str(document).map_err(to_py_err)?;
    report_to_dict(&scenario)
}

#[pymodule]
#[pyo3(name = "_lib")]
pub fn fracem(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("FUEL_TABLE_VERSION", FUEL_TABLE.version)?;
    m.add_class::<PyFrac>()?;
    m.add_function(wrap_pyfunction!(evaluate_scenario, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_scenario_toml, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fracem_core::job::FracType;
    use is_close::is_close;
    use std::ffi::CString;

    fn reference_job() -> JobConfiguration {
        JobConfiguration::new(JobParameters {
            frac_type: FracType::Conventional,
            stage_time: 60.0,
            num_stage: 10,
            bottomhole_pressure: 8000.0,
            pump_rate: 80.0,
            truck_tanks: 5,
            truck_pumps: 5,
            pump_efficiency: 0.9,
        })
        .unwrap()
    }

    fn frac<'py>(py: Python<'py>) -> Bound<'py, PyAny> {
        py.get_type::<PyFrac>()
            .call1(("conv", 60.0, 10, 8000.0, 80.0, 5, 5))
            .unwrap()
    }

    #[test]
    fn test_fuel_fractions_are_positional() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let value: FloatValue = frac(py)
                .call_method1("primeMover", (60.0, 0.5, 0.0, 0.5))
                .unwrap()
                .extract()
                .unwrap();

            let job = reference_job();
            let lng = job
                .prime_mover(
                    60.0,
                    FuelMix {
                        diesel: 0.5,
                        lng: 0.5,
                        ..FuelMix::default()
                    },
                )
                .unwrap();
            let cng = job
                .prime_mover(
                    60.0,
                    FuelMix {
                        diesel: 0.5,
                        cng: 0.5,
                        ..FuelMix::default()
                    },
                )
                .unwrap();
            assert!(is_close!(value, lng));
            assert!(!is_close!(value, cng));
        });
    }

    #[test]
    fn test_python_method_names() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let frac = frac(py);
            let auxiliary: FloatValue = frac.call_method0("auxillary").unwrap().extract().unwrap();
            assert_eq!(auxiliary, 25000.0);

            let hhp: FloatValue = frac.getattr("hhp").unwrap().extract().unwrap();
            assert!(is_close!(hhp, reference_job().horsepower_hr()));

            let mob: FloatValue = frac
                .call_method1("mobDemob", (150.0, 6.0))
                .unwrap()
                .extract()
                .unwrap();
            assert!(is_close!(mob, 14497.084));
        });
    }

    #[test]
    fn test_errors_raise_value_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let err = py
                .get_type::<PyFrac>()
                .call1(("refrac", 60.0, 10, 8000.0, 80.0, 5, 5))
                .unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let err = frac(py)
                .call_method1("sandTransport", (100.0, 0.0, 50.0, 6.0))
                .unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_evaluate_scenario_dict() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let code = CString::new(
                r#"{
    "job": {
        "frac_type": "conv",
        "stage_time": 60.0,
        "num_stage": 10,
        "bottomhole_pressure": 8000.0,
        "pump_rate": 80.0,
        "truck_tanks": 5,
        "truck_pumps": 5,
    },
    "sources": [
        {"type": "PrimeMover", "parameters": {"operating_minutes": 60.0, "fuel_mix": {"diesel": 1.0}}},
        {"type": "MobDemob", "parameters": {"mob_distance": 150.0, "truck_consumption": 6.0}},
        {"type": "LandDisturbance"},
    ],
}"#,
            )
            .unwrap();
            let scenario = py.eval(code.as_c_str(), None, None).unwrap();

            let from_dict = pythonize::depythonize::<Scenario>(&scenario).unwrap();
            assert_eq!(from_dict.sources.len(), 3);

            let result = evaluate_scenario(&scenario).unwrap();
            assert_eq!(result.len(), 3);
            assert!(is_close!(result["prime_mover"], 35514.17670852681));
            assert!(is_close!(result["mob_demob"], 14497.084));
            assert!(is_close!(result["land"], 118750.0));
        });
    }

    #[test]
    fn test_evaluate_scenario_rejects_unknown_source() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let code = CString::new(
                r#"{"job": {"frac_type": "conv", "stage_time": 60.0, "num_stage": 10,
                    "bottomhole_pressure": 8000.0, "pump_rate": 80.0,
                    "truck_tanks": 5, "truck_pumps": 5},
                    "sources": [{"type": "Helicopter"}]}"#,
            )
            .unwrap();
            let scenario = py.eval(code.as_c_str(), None, None).unwrap();
            let err = evaluate_scenario(&scenario).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }
}
