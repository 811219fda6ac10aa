//! Embedded Site Content
//!
//! Raw, borrowed content tables for the OpenOA website. These are coerced into
//! the owned response models (and validated) by `Catalog::builtin()`.
//!
//! Sources: the OpenOA README, documentation and JOSS paper.

/// Raw analysis-method record
#[derive(Debug, Clone, Copy)]
pub struct MethodEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub citations: &'static [&'static str],
    pub parameters: Option<&'static [&'static str]>,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DocEntry {
    pub title: &'static str,
    pub content: &'static str,
    pub subsections: Option<&'static [SubsectionEntry]>,
}

#[derive(Debug, Clone, Copy)]
pub struct SubsectionEntry {
    pub title: &'static str,
    pub content: Option<&'static str>,
    pub items: Option<&'static [&'static str]>,
    pub code: Option<&'static str>,
    pub text: Option<&'static str>,
    pub doi: Option<&'static str>,
    pub subsections: &'static [SubsectionEntry],
}

#[derive(Debug, Clone, Copy)]
pub struct MemberEntry {
    pub name: &'static str,
    pub role: &'static str,
    pub orcid: Option<&'static str>,
}

const SUB: SubsectionEntry = SubsectionEntry {
    title: "",
    content: None,
    items: None,
    code: None,
    text: None,
    doi: None,
    subsections: &[],
};

const JOSS_2021: &str = "Perr-Sauer, J., Optis, M., Fields, J. M., Bodini, N., Lee, J. C. Y., Todd, A., Simley, E., Hammond, R., Phillips, C., Lunacek, M., Kemper, T., Williams, L., Craig, A., Agarwal, N., Sheng, S., & Meissner, J. (2021). OpenOA: An Open-Source Codebase For Operational Analysis of Wind Farms. Journal of Open Source Software, 6(58), 2171.";

const BODINI_OPTIS_2020: &str = "Bodini, N., & Optis, M. (2020). Operational-based annual energy production uncertainty: are its components actually uncorrelated? Wind Energy Science, 5(4), 1435-1448.";

const CRAIG_2018: &str = "Craig, A., Optis, M., Fields, M. J., & Moriarty, P. (2018). Uncertainty quantification in the analyses of operational wind power plant performance. Journal of Physics: Conference Series, 1037, 052021.";

const LUNACEK_2018: &str = "Lunacek, M., Fields, M. J., Craig, A., Lee, J. C. Y., Meissner, J., Philips, C., Sheng, S., & King, R. (2018). Understanding biases in pre-construction estimates. Journal of Physics: Conference Series, 1037, 062009.";

// ============================================================================
// ANALYSIS METHODS
// ============================================================================

pub static ANALYSIS_METHODS: &[MethodEntry] = &[
    MethodEntry {
        id: "monte_carlo_aep",
        name: "Monte Carlo AEP",
        short_description: "Long-term annual energy production with uncertainty quantification.",
        long_description: "Estimates the long-term operational annual energy production (AEP) of a wind plant. Revenue meter energy, corrected for availability and curtailment losses, is regressed against reanalysis wind speed (optionally with temperature and wind direction) at monthly, daily or hourly resolution. A Monte Carlo simulation samples the uncertainty of every input and modelling choice to produce an AEP distribution.",
        citations: &[BODINI_OPTIS_2020, CRAIG_2018, JOSS_2021],
        parameters: Some(&[
            "Revenue meter energy",
            "Availability losses",
            "Curtailment losses",
            "Reanalysis wind speed",
            "Number of Monte Carlo simulations",
        ]),
        icon: "📈",
    },
    MethodEntry {
        id: "turbine_long_term_gross_energy",
        name: "Turbine Long-Term Gross Energy",
        short_description: "Ideal turbine energy with availability and curtailment removed.",
        long_description: "Calculates the long-term gross energy of each turbine. Turbine SCADA power is filtered for underperformance and outliers, missing data is imputed from correlated neighbours, and daily energy is regressed against reanalysis wind speed and density, then applied to the long-term reanalysis record.",
        citations: &[JOSS_2021],
        parameters: Some(&[
            "Turbine SCADA power and wind speed",
            "Reanalysis wind speed and air density",
            "Power curve filter thresholds",
        ]),
        icon: "🌀",
    },
    MethodEntry {
        id: "electrical_losses",
        name: "Electrical Losses",
        short_description: "Losses between turbine output and the revenue meter.",
        long_description: "Compares the sum of turbine-level energy with revenue meter energy over concurrent periods to estimate losses in the collection system and substation. Periods with incomplete turbine or meter data are excluded, and a Monte Carlo simulation captures measurement uncertainty.",
        citations: &[JOSS_2021],
        parameters: Some(&[
            "Turbine SCADA energy",
            "Revenue meter energy",
            "Data availability threshold",
        ]),
        icon: "🔌",
    },
    MethodEntry {
        id: "eya_gap_analysis",
        name: "EYA Gap Analysis",
        short_description: "Waterfall comparison of pre-construction estimates and operations.",
        long_description: "Attributes the difference between a pre-construction energy yield assessment (EYA) and the operational AEP to individual loss categories: availability, electrical losses, turbine ideal energy and unexplained residuals. The result is presented as a waterfall chart.",
        citations: &[LUNACEK_2018, JOSS_2021],
        parameters: Some(&[
            "EYA estimates of AEP and losses",
            "Operational AEP",
            "Operational availability and electrical losses",
        ]),
        icon: "📊",
    },
    MethodEntry {
        id: "wake_losses",
        name: "Wake Losses",
        short_description: "Internal wake losses at plant and turbine level.",
        long_description: "Estimates internal wake losses by comparing the energy of every turbine against the mean of the freestream turbines for each wind direction bin. Results are corrected to the long term using reanalysis wind roses, with uncertainty from Monte Carlo sampling.",
        citations: &[JOSS_2021],
        parameters: Some(&[
            "Turbine SCADA power and wind direction",
            "Turbine coordinates",
            "Reanalysis wind speed and direction",
        ]),
        icon: "🌊",
    },
    MethodEntry {
        id: "static_yaw_misalignment",
        name: "Static Yaw Misalignment",
        short_description: "Per-turbine static yaw misalignment from nacelle vane data.",
        long_description: "Estimates static yaw misalignment for each turbine by fitting a cosine curve to normalized power as a function of wind vane angle within wind speed bins. The misalignment is the vane angle at peak power, with Monte Carlo uncertainty across bins.",
        citations: &[JOSS_2021],
        parameters: None,
        icon: "🧭",
    },
];

// ============================================================================
// FEATURES
// ============================================================================

pub static FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        id: "plant_data",
        name: "PlantData",
        description: "A single container for SCADA, meter, tower, status, curtailment, asset and reanalysis data with schema validation.",
        icon: "🗂️",
        category: "data",
    },
    FeatureEntry {
        id: "qa",
        name: "Quality Assurance",
        description: "Timestamp checks, daylight-saving gap detection and duplicate removal for raw SCADA.",
        icon: "✅",
        category: "data",
    },
    FeatureEntry {
        id: "filters",
        name: "Filters",
        description: "Range, window, bin and power-curve based outlier detection for turbine data.",
        icon: "🧹",
        category: "utility",
    },
    FeatureEntry {
        id: "power_curve",
        name: "Power Curve Fitting",
        description: "IEC binning, logistic five-parameter and generalized additive model power curves.",
        icon: "⚙️",
        category: "utility",
    },
    FeatureEntry {
        id: "imputing",
        name: "Imputing",
        description: "Fill data gaps using correlated neighbouring turbines or sensors.",
        icon: "🩹",
        category: "utility",
    },
    FeatureEntry {
        id: "timeseries",
        name: "Time Series",
        description: "Resampling, gap finding and time zone helpers for operational data.",
        icon: "⏱️",
        category: "utility",
    },
    FeatureEntry {
        id: "unit_conversion",
        name: "Unit Conversion",
        description: "Convert between power and energy and normalize to plant capacity.",
        icon: "🔁",
        category: "utility",
    },
    FeatureEntry {
        id: "met_data_processing",
        name: "Met Data Processing",
        description: "Air density, wind shear, veer and U/V component calculations.",
        icon: "🌡️",
        category: "utility",
    },
    FeatureEntry {
        id: "reanalysis_downloading",
        name: "Reanalysis Downloading",
        description: "Fetch ERA5 and MERRA-2 reanalysis products for a plant location.",
        icon: "🛰️",
        category: "data",
    },
    FeatureEntry {
        id: "plotting",
        name: "Plotting",
        description: "Plant layouts, power curves, wind roses and analysis result charts.",
        icon: "🎨",
        category: "visualization",
    },
];

// ============================================================================
// DOCUMENTATION
// ============================================================================

pub static OVERVIEW: DocEntry = DocEntry {
    title: "Overview",
    content: "OpenOA is an open-source Python framework for assessing wind plant performance using operational assessment methodologies. It was developed by the National Renewable Energy Laboratory (NREL) to provide a common, transparent reference implementation of industry-standard analyses.\n\nThe framework combines a validated data container with analysis methods that propagate uncertainty through Monte Carlo simulation.",
    subsections: Some(&[
        SubsectionEntry {
            title: "Key Capabilities",
            items: Some(&[
                "Long-term AEP estimation with uncertainty",
                "Turbine ideal energy and electrical loss estimation",
                "Wake loss and yaw misalignment analyses",
                "EYA gap analysis against pre-construction estimates",
            ]),
            ..SUB
        },
        SubsectionEntry {
            title: "Open Source",
            content: Some("OpenOA is released under the BSD-3-Clause license and developed in the open on GitHub."),
            ..SUB
        },
    ]),
};

pub static INSTALLATION: DocEntry = DocEntry {
    title: "Installation",
    content: "OpenOA requires Python 3.10 or newer and is published on PyPI.\n\nA virtual environment (venv or conda) is recommended.",
    subsections: Some(&[
        SubsectionEntry {
            title: "From PyPI",
            code: Some("pip install openoa"),
            ..SUB
        },
        SubsectionEntry {
            title: "With example notebooks",
            code: Some("pip install \"openoa[examples]\""),
            ..SUB
        },
        SubsectionEntry {
            title: "From source",
            code: Some("git clone https://github.com/NREL/OpenOA.git\ncd OpenOA\npip install -e \".[develop,docs,examples]\""),
            ..SUB
        },
    ]),
};

pub static SCHEMA_INFO: DocEntry = DocEntry {
    title: "PlantData Schema",
    content: "All analyses read from a PlantData object. Column names follow the IEC 61400-25 tag conventions, and PlantData validates that each analysis has the columns it needs.\n\nA metadata file maps the column names of your source data onto these tags.",
    subsections: Some(&[
        SubsectionEntry {
            title: "Time Series Tables",
            content: Some("Operational measurements, indexed by timestamp."),
            subsections: &[
                SubsectionEntry {
                    title: "SCADA",
                    items: Some(&["asset_id", "WTUR_W (power, kW)", "WMET_HorWdSpd (wind speed, m/s)", "WMET_HorWdDir (wind direction, deg)", "WTUR_SupWh (energy, kWh)"]),
                    ..SUB
                },
                SubsectionEntry {
                    title: "Meter",
                    items: Some(&["MMTR_SupWh (revenue meter energy, kWh)"]),
                    ..SUB
                },
                SubsectionEntry {
                    title: "Curtailment",
                    items: Some(&["IAVL_ExtPwrDnWh (curtailment, kWh)", "IAVL_DnWh (availability loss, kWh)"]),
                    ..SUB
                },
            ],
            ..SUB
        },
        SubsectionEntry {
            title: "Metadata and Reference Data",
            subsections: &[
                SubsectionEntry {
                    title: "Asset",
                    items: Some(&["asset_id", "latitude", "longitude", "rated_power", "hub_height", "rotor_diameter", "type"]),
                    ..SUB
                },
                SubsectionEntry {
                    title: "Reanalysis",
                    items: Some(&["WMETR_HorWdSpd (wind speed, m/s)", "WMETR_EnvTmp (temperature, K)", "WMETR_EnvPres (pressure, Pa)", "WMETR_AirDen (air density, kg/m3)"]),
                    ..SUB
                },
            ],
            ..SUB
        },
    ]),
};

pub static CITATIONS: DocEntry = DocEntry {
    title: "Citations",
    content: "If you use OpenOA in your work, please cite the Journal of Open Source Software paper.\n\nPlease also cite the method-specific publications listed with each analysis method.",
    subsections: Some(&[
        SubsectionEntry {
            title: "OpenOA (JOSS, 2021)",
            text: Some(JOSS_2021),
            doi: Some("10.21105/joss.02171"),
            ..SUB
        },
        SubsectionEntry {
            title: "AEP Uncertainty",
            text: Some(BODINI_OPTIS_2020),
            doi: Some("10.5194/wes-5-1435-2020"),
            ..SUB
        },
    ]),
};

// ============================================================================
// TEAM
// ============================================================================

pub static TEAM_MEMBERS: &[MemberEntry] = &[
    MemberEntry { name: "Jordan Perr-Sauer", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Mike Optis", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Jason M. Fields", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Nicola Bodini", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Joseph C. Y. Lee", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Austin Todd", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Eric Simley", role: "Co-author, OpenOA JOSS paper", orcid: None },
    MemberEntry { name: "Rob Hammond", role: "Co-author, OpenOA JOSS paper", orcid: None },
];
