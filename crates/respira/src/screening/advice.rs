use serde::Serialize;

use super::domain::Locale;
use super::evaluation::PredictionResult;

/// General-health recommendation shown alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTip {
    ConsultDoctor,
    AvoidSmokeAndPollution,
    WearMaskOutdoors,
    KeepHomeFreeOfAllergens,
    LightExercise,
    NutritionAndWater,
    AirPurifier,
    AdequateRest,
    Humidifier,
    ReduceHeavyActivity,
    AvoidTemperatureSwings,
    KeepInhalerAccessible,
    LungFunctionCheckups,
    AvoidAsthmaTriggers,
    PursedLipBreathing,
    MonitorOxygenSaturation,
    WashHands,
    VentilateHome,
}

impl HealthTip {
    pub const fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Id => self.indonesian(),
            Locale::En => self.english(),
        }
    }

    const fn english(self) -> &'static str {
        match self {
            HealthTip::ConsultDoctor => "Consult with a doctor for further examination",
            HealthTip::AvoidSmokeAndPollution => "Avoid exposure to cigarette smoke and air pollution",
            HealthTip::WearMaskOutdoors => "Wear a mask when outdoors",
            HealthTip::KeepHomeFreeOfAllergens => "Keep your home clean from dust and allergens",
            HealthTip::LightExercise => "Do light exercise regularly",
            HealthTip::NutritionAndWater => "Eat nutritious food and drink plenty of water",
            HealthTip::AirPurifier => "Use an air purifier indoors",
            HealthTip::AdequateRest => "Get enough rest to strengthen your immune system",
            HealthTip::Humidifier => "Use a humidifier to maintain healthy air humidity",
            HealthTip::ReduceHeavyActivity => "Reduce heavy physical activity when symptoms worsen",
            HealthTip::AvoidTemperatureSwings => "Avoid sudden extreme temperature changes",
            HealthTip::KeepInhalerAccessible => "Keep your inhaler accessible at all times",
            HealthTip::LungFunctionCheckups => "Do regular lung function checkups",
            HealthTip::AvoidAsthmaTriggers => {
                "Avoid asthma triggers such as dust, pet dander, or strong fragrances"
            }
            HealthTip::PursedLipBreathing => "Practice breathing exercises like pursed-lip breathing",
            HealthTip::MonitorOxygenSaturation => "Monitor your oxygen saturation if possible",
            HealthTip::WashHands => "Wash your hands regularly to reduce germ transmission",
            HealthTip::VentilateHome => "Ensure good home ventilation to lower infection risks",
        }
    }

    const fn indonesian(self) -> &'static str {
        match self {
            HealthTip::ConsultDoctor => "Konsultasikan dengan dokter untuk pemeriksaan lebih lanjut",
            HealthTip::AvoidSmokeAndPollution => "Hindari paparan asap rokok dan polusi udara",
            HealthTip::WearMaskOutdoors => "Gunakan masker saat berada di luar ruangan",
            HealthTip::KeepHomeFreeOfAllergens => "Jaga kebersihan rumah dari debu dan alergen",
            HealthTip::LightExercise => "Lakukan olahraga ringan secara teratur",
            HealthTip::NutritionAndWater => "Konsumsi makanan bergizi dan perbanyak air putih",
            HealthTip::AirPurifier => "Gunakan air purifier di dalam ruangan",
            HealthTip::AdequateRest => "Istirahat yang cukup untuk memperkuat sistem imun",
            HealthTip::Humidifier => "Gunakan humidifier untuk menjaga kelembapan udara",
            HealthTip::ReduceHeavyActivity => "Kurangi aktivitas berat saat gejala kambuh",
            HealthTip::AvoidTemperatureSwings => "Hindari perubahan suhu ekstrem secara mendadak",
            HealthTip::KeepInhalerAccessible => "Pastikan inhaler selalu tersedia dan mudah dijangkau",
            HealthTip::LungFunctionCheckups => "Lakukan pemeriksaan fungsi paru secara berkala",
            HealthTip::AvoidAsthmaTriggers => {
                "Hindari pemicu asma seperti debu, bulu hewan, atau parfum tajam"
            }
            HealthTip::PursedLipBreathing => {
                "Lakukan latihan pernapasan seperti pursed-lip breathing"
            }
            HealthTip::MonitorOxygenSaturation => "Pantau saturasi oksigen jika memungkinkan",
            HealthTip::WashHands => "Cuci tangan secara rutin untuk mencegah penyebaran kuman",
            HealthTip::VentilateHome => {
                "Pastikan ventilasi rumah baik untuk mengurangi risiko infeksi"
            }
        }
    }
}

const GENERAL_TIPS: [HealthTip; 5] = [
    HealthTip::LightExercise,
    HealthTip::NutritionAndWater,
    HealthTip::Humidifier,
    HealthTip::ReduceHeavyActivity,
    HealthTip::AvoidTemperatureSwings,
];

/// Tips for a result, most urgent first, without duplicates.
pub fn recommended_tips(result: &PredictionResult) -> Vec<HealthTip> {
    let (_, peak) = result.highest();
    let mut tips = Vec::new();

    if peak > 50.0 {
        tips.extend([
            HealthTip::ConsultDoctor,
            HealthTip::AvoidSmokeAndPollution,
            HealthTip::WearMaskOutdoors,
        ]);
    }

    if result.asthma > 40.0 || result.copd > 40.0 {
        tips.extend([HealthTip::KeepHomeFreeOfAllergens, HealthTip::AirPurifier]);
    }

    if result.asthma > 50.0 {
        tips.extend([
            HealthTip::KeepInhalerAccessible,
            HealthTip::LungFunctionCheckups,
            HealthTip::AvoidAsthmaTriggers,
        ]);
    }

    if result.copd > 50.0 {
        tips.extend([
            HealthTip::PursedLipBreathing,
            HealthTip::MonitorOxygenSaturation,
        ]);
    }

    if result.respiratory_infection > 40.0 {
        tips.extend([
            HealthTip::AdequateRest,
            HealthTip::WashHands,
            HealthTip::VentilateHome,
        ]);
    }

    tips.extend(GENERAL_TIPS);

    let mut unique = Vec::with_capacity(tips.len());
    for tip in tips {
        if !unique.contains(&tip) {
            unique.push(tip);
        }
    }
    unique
}

pub fn health_tips(result: &PredictionResult, locale: Locale) -> Vec<&'static str> {
    recommended_tips(result)
        .into_iter()
        .map(|tip| tip.text(locale))
        .collect()
}
