

use super::models::{Disease, Syndrome};
use lazy_static::lazy_static;

lazy_static! {

    pub static ref HYPERTENSION: Disease = Disease::new("hypertension", "高血压", "Hypertension")
        .with_aliases(&["眩晕", "头痛", "肝风"])
        .with_syndromes(vec![
            Syndrome::new("hypertension_liver_yang", "肝阳上亢型", "Liver Yang Hyperactivity")
                .with_tcm_symptoms(&["头目胀痛", "面红目赤", "口苦", "急躁易怒"])
                .with_western_symptoms(&["血压升高（收缩压/舒张压超过正常值）", "头痛", "头晕"]),
            Syndrome::new("hypertension_phlegm_dampness", "痰湿中阻型", "Phlegm-Dampness Obstruction")
                .with_tcm_symptoms(&["头晕头重（如布裹头）", "胸闷恶心", "食少多寐"])
                .with_western_symptoms(&["血压升高", "头晕", "胸闷"]),
        ]);


    pub static ref DIABETES_TYPE2: Disease = Disease::new("diabetes_type2", "2型糖尿病", "Type 2 Diabetes")
        .with_aliases(&["消渴"])
        .with_syndromes(vec![
            Syndrome::new("diabetes_lung_heat", "肺热津伤型（上消）", "Lung Heat with Fluid Damage")
                .with_tcm_symptoms(&["烦渴多饮", "口干舌燥", "小便频数"])
                .with_western_symptoms(&["血糖升高（空腹/餐后）", "多饮", "多食", "多尿", "体重下降"]),
            Syndrome::new("diabetes_stomach_heat", "胃热炽盛型（中消）", "Stomach Heat Exuberance")
                .with_tcm_symptoms(&["多食易饥", "口渴", "形体消瘦", "大便干燥"])
                .with_western_symptoms(&["血糖升高", "多食", "体重下降"]),
            Syndrome::new("diabetes_kidney_yin", "肾阴亏虚型（下消）", "Kidney Yin Deficiency")
                .with_tcm_symptoms(&["尿频量多", "浑浊如膏", "腰膝酸软"])
                .with_western_symptoms(&["血糖升高", "多尿", "腰痛"]),
        ]);


    pub static ref CORONARY_DISEASE: Disease = Disease::new("coronary_disease", "冠心病", "Coronary Heart Disease")
        .with_aliases(&["胸痹", "心痛"])
        .with_syndromes(vec![
            Syndrome::new("coronary_blood_stasis", "心血瘀阻型", "Heart Blood Stasis")
                .with_tcm_symptoms(&["心胸刺痛", "痛处固定", "入夜更甚", "舌质紫暗"])
                .with_western_symptoms(&["心绞痛（胸骨后压榨性疼痛，可放射）", "心电图异常"]),
            Syndrome::new("coronary_phlegm_turbidity", "痰浊闭阻型", "Phlegm Turbidity Obstruction")
                .with_tcm_symptoms(&["胸闷如窒而痛", "痰多气短", "肢体沉重"])
                .with_western_symptoms(&["胸痛", "胸闷", "气短"]),
        ]);


    pub static ref COPD: Disease = Disease::new("copd", "慢性阻塞性肺疾病", "COPD")
        .with_aliases(&["肺胀", "喘证"])
        .with_syndromes(vec![
            Syndrome::new("copd_phlegm_heat", "痰热郁肺型", "Phlegm-Heat Accumulation")
                .with_tcm_symptoms(&["咳嗽气急", "痰黄粘稠", "胸膈烦闷", "身热口渴"])
                .with_western_symptoms(&["持续性呼吸困难", "咳嗽", "咳痰", "肺功能检查异常"]),
            Syndrome::new("copd_lung_kidney", "肺肾气虚型", "Lung-Kidney Qi Deficiency")
                .with_tcm_symptoms(&["呼吸浅短难续", "声低气怯", "甚则张口抬肩"])
                .with_western_symptoms(&["呼吸困难", "活动后加重"]),
        ]);


    pub static ref CHRONIC_GASTRITIS: Disease = Disease::new("chronic_gastritis", "慢性胃炎/消化性溃疡", "Chronic Gastritis/Peptic Ulcer")
        .with_aliases(&["胃脘痛", "痞满"])
        .with_syndromes(vec![
            Syndrome::new("gastritis_liver_qi", "肝气犯胃型", "Liver Qi Invading Stomach")
                .with_tcm_symptoms(&["胃脘胀痛", "痛连两胁", "嗳气频繁", "情志不舒时加重"])
                .with_western_symptoms(&["上腹部疼痛", "饱胀", "反酸", "嗳气", "胃镜检查可见炎症或溃疡"]),
            Syndrome::new("gastritis_spleen_cold", "脾胃虚寒型", "Spleen-Stomach Cold Deficiency")
                .with_tcm_symptoms(&["胃痛隐隐", "喜温喜按", "空腹痛甚", "食后缓解"])
                .with_western_symptoms(&["上腹部隐痛", "空腹时加重", "进食后缓解"]),
        ]);


    pub static ref RHEUMATOID_ARTHRITIS: Disease = Disease::new("rheumatoid_arthritis", "类风湿性关节炎", "Rheumatoid Arthritis")
        .with_aliases(&["痹证（尪痹）"])
        .with_syndromes(vec![
            Syndrome::new("arthritis_cold_dampness", "寒湿痹阻型", "Cold-Dampness Obstruction")
                .with_tcm_symptoms(&["关节冷痛", "痛处固定", "得温则减", "遇寒痛增"])
                .with_western_symptoms(&["对称性小关节肿痛（如手、腕）", "晨僵", "类风湿因子阳性"]),
            Syndrome::new("arthritis_liver_kidney", "肝肾亏虚型", "Liver-Kidney Deficiency")
                .with_tcm_symptoms(&["关节畸形", "屈伸不利", "腰膝酸软"])
                .with_western_symptoms(&["关节变形", "活动受限", "X光检查异常"]),
        ]);


    pub static ref CHRONIC_KIDNEY_DISEASE: Disease = Disease::new("chronic_kidney_disease", "慢性肾病", "Chronic Kidney Disease")
        .with_aliases(&["水肿", "虚劳"])
        .with_syndromes(vec![
            Syndrome::new("kidney_spleen_qi", "脾肾气虚型", "Spleen-Kidney Qi Deficiency")
                .with_tcm_symptoms(&["面色无华", "腰膝酸软", "神疲乏力", "尿中泡沫增多"])
                .with_western_symptoms(&["蛋白尿", "血肌酐升高", "水肿", "高血压"]),
            Syndrome::new("kidney_dampness_turbidity", "湿浊内蕴型", "Dampness-Turbidity Retention")
                .with_tcm_symptoms(&["恶心呕吐", "口中粘腻", "食欲不振", "皮肤瘙痒"])
                .with_western_symptoms(&["恶心", "呕吐", "食欲下降", "皮肤瘙痒"]),
        ]);


    pub static ref STROKE_SEQUELAE: Disease = Disease::new("stroke_sequelae", "脑血管病后遗症", "Stroke Sequelae")
        .with_aliases(&["中风"])
        .with_syndromes(vec![
            Syndrome::new("stroke_qi_blood", "气虚血瘀型", "Qi Deficiency with Blood Stasis")
                .with_tcm_symptoms(&["半身不遂", "口眼歪斜", "言语不利", "面色苍白", "气短乏力"])
                .with_western_symptoms(&["肢体偏瘫", "感觉障碍", "言语不清等神经功能缺损"]),
            Syndrome::new("stroke_liver_yang", "肝阳上亢型", "Liver Yang Hyperactivity")
                .with_tcm_symptoms(&["半身不遂", "眩晕头痛", "面红耳赤"])
                .with_western_symptoms(&["肢体偏瘫", "头痛", "头晕"]),
        ]);
}


/// Built-in diseases in catalog order.
pub fn builtin_diseases() -> Vec<Disease> {
    vec![
        HYPERTENSION.clone(),
        DIABETES_TYPE2.clone(),
        CORONARY_DISEASE.clone(),
        COPD.clone(),
        CHRONIC_GASTRITIS.clone(),
        RHEUMATOID_ARTHRITIS.clone(),
        CHRONIC_KIDNEY_DISEASE.clone(),
        STROKE_SEQUELAE.clone(),
    ]
}
