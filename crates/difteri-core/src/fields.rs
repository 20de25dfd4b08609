//! Wire field names.
//!
//! These are the keys of the flat intake record exchanged with the
//! prediction backend and of the historical case base. Validation errors
//! use them as field paths so the front-end can place messages next to
//! the matching control.

// Patient
pub const ID_CASEBASE: &str = "id_casebase";
pub const NO_RM: &str = "no_rm";
pub const NAMA: &str = "nama";
pub const USIA: &str = "usia";

/// Diagnosis label of a historical case.
pub const PENYAKIT: &str = "penyakit";

// Clinical symptoms
pub const MUAL: &str = "mual";
pub const MUNTAH: &str = "muntah";
pub const BATUK: &str = "batuk";
pub const PILEK: &str = "pilek";
pub const NYERI_MENELAN: &str = "nyeri_menelan";
pub const SUARA_MENGOROK: &str = "suara_mengorok";
pub const SESAK: &str = "sesak";
pub const LAMA_DEMAM: &str = "lama_demam";

// Physical exam
pub const PEMBESARAN_KELENJAR: &str = "pembesaran_kelenjar";
pub const BULLNECK: &str = "bullneck";
pub const TERDAPAT_MEMBRAN_DI: &str = "terdapat_membran_di";
pub const LUAS_MEMBRAN: &str = "luas_membran";
pub const BERDARAH_SAAT_DI_SWAB: &str = "berdarah_saat_di_swab";
pub const KONJUNGTIVA: &str = "konjungtiva";
pub const KELENJAR_GETAH_BENING: &str = "kelenjar_getah_bening";
pub const TONSIL: &str = "tonsil";

// Laboratory: hematology
pub const HEMOGLOBIN: &str = "hemoglobin";
pub const HEMATROKIT: &str = "hematrokit";
pub const ERITROSIT: &str = "eritrosit";
pub const MCV: &str = "m_c_v";
pub const MCH: &str = "m_c_h";
pub const MCHC: &str = "m_c_h_c";
pub const LEUKOSIT: &str = "leukosit";
pub const TROMBOSIT: &str = "trombosit";
pub const LAJU_ENDAP_DARAH: &str = "laju_endap_darah";

// Laboratory: differential count (percent)
pub const BASOFIL: &str = "basofil";
pub const EOSINOFIL: &str = "eosinofil";
pub const NEUTROFIL: &str = "neutrofil";
pub const LIMPOSIT: &str = "limposit";
pub const MONOSIT: &str = "monosit";

// Laboratory: chemistry and electrolytes
pub const GLUKOSA: &str = "glukosa";
pub const NATRIUM: &str = "natrium";
pub const KALIUM: &str = "kalium";
pub const KHLORIDA: &str = "khlorida";

// Laboratory: blood gas
pub const PH: &str = "ph";
pub const PCO2: &str = "3pco2";
pub const BE: &str = "be";
pub const SO2: &str = "so2";

// Laboratory: ECG
pub const RATE: &str = "rate";
pub const QTC: &str = "qtc";

// Vital signs
pub const BB: &str = "bb";
pub const SISTOL: &str = "sistol";
pub const DIASTOL: &str = "diastol";
pub const NADI: &str = "nadi";
pub const PERNAFASAN: &str = "pernafasan";
pub const SUHU: &str = "suhu";

// Additional data
pub const KONTAK_ERAT_DIFTERI: &str = "kontak_erat_difteri";
pub const STATUS_IMUNISASI: &str = "status_imunisasi";
pub const ANTIBIOTIK_SUDAH_DIBERI: &str = "antibiotik_sudah_diberi";

/// Identity and label fields always requested for similarity output,
/// ahead of the features the backend declares.
pub const IDENTITY_FIELDS: [&str; 4] = [ID_CASEBASE, NO_RM, NAMA, PENYAKIT];
