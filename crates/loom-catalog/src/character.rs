//! Character portrait facets, tables and profession presets

use crate::catalog::OptionCatalog;
use crate::facet::Facet;
use loom_core::{pairs, DisplayLabel, Lang, OptionPair};
use std::collections::BTreeMap;

/// One option dimension of the character composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterFacet {
    Profession,
    Framing,
    Gender,
    Age,
    AspectRatio,
    Expression,
    Gaze,
    BodyType,
    SkinTone,
    HairStyle,
    HairColor,
    Bangs,
    BangsStyle,
    FaceShape,
    EyeSize,
    NoseSize,
    MouthShape,
    CheekFullness,
    JawWidth,
    EyeColor,
    OutfitType,
    OutfitPalette,
    Material,
    Appearance,
    ApparelDetail,
    Accessory,
    TechDetail,
    Marking,
}

const ALL: &[CharacterFacet] = &[
    CharacterFacet::Profession,
    CharacterFacet::Framing,
    CharacterFacet::Gender,
    CharacterFacet::Age,
    CharacterFacet::AspectRatio,
    CharacterFacet::Expression,
    CharacterFacet::Gaze,
    CharacterFacet::BodyType,
    CharacterFacet::SkinTone,
    CharacterFacet::HairStyle,
    CharacterFacet::HairColor,
    CharacterFacet::Bangs,
    CharacterFacet::BangsStyle,
    CharacterFacet::FaceShape,
    CharacterFacet::EyeSize,
    CharacterFacet::NoseSize,
    CharacterFacet::MouthShape,
    CharacterFacet::CheekFullness,
    CharacterFacet::JawWidth,
    CharacterFacet::EyeColor,
    CharacterFacet::OutfitType,
    CharacterFacet::OutfitPalette,
    CharacterFacet::Material,
    CharacterFacet::Appearance,
    CharacterFacet::ApparelDetail,
    CharacterFacet::Accessory,
    CharacterFacet::TechDetail,
    CharacterFacet::Marking,
];

/// A named profession with its role text and default outfit phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfessionPreset {
    pub name: &'static str,
    pub name_zh: &'static str,
    pub role: &'static str,
    pub outfit: &'static str,
}

impl ProfessionPreset {
    /// Look a preset up by its canonical name
    pub fn find(name: &str) -> Option<&'static ProfessionPreset> {
        let name = name.trim();
        PROFESSION_PRESETS.iter().find(|p| p.name == name)
    }
}

pub const PROFESSION_PRESETS: &[ProfessionPreset] = &[
    ProfessionPreset {
        name: "Space Pilot",
        name_zh: "太空飞行员",
        role: "space pilot",
        outfit: "wearing a detailed retro-futuristic flight jacket, patches and mechanical tubing",
    },
    ProfessionPreset {
        name: "Starship Engineer",
        name_zh: "星舰工程师",
        role: "starship engineer",
        outfit: "wearing a rugged utility jumpsuit, tool belts, worn fabric, and exposed cables",
    },
    ProfessionPreset {
        name: "Bounty Hunter",
        name_zh: "赏金猎人",
        role: "space bounty hunter",
        outfit: "wearing reinforced leather armor, metal plates, ammo straps, and a tactical harness",
    },
    ProfessionPreset {
        name: "Station Security",
        name_zh: "空间站安保",
        role: "space station security officer",
        outfit: "wearing a compact armored uniform, insignia patches and a chest rig",
    },
    ProfessionPreset {
        name: "Scientist",
        name_zh: "科学家",
        role: "sci-fi research scientist",
        outfit: "wearing a sleek lab coat over a high-tech undersuit, subtle glowing seams",
    },
    ProfessionPreset {
        name: "Navigator",
        name_zh: "领航员",
        role: "ship navigator",
        outfit: "wearing a slim-fit flight suit, holographic map panels and navigation wrist gear",
    },
    ProfessionPreset {
        name: "Smuggler",
        name_zh: "走私者",
        role: "space smuggler",
        outfit: "wearing a weathered jacket, layered clothes, and hidden holsters",
    },
    ProfessionPreset {
        name: "Medic",
        name_zh: "医疗兵",
        role: "space medic",
        outfit: "wearing a compact medical vest, pouches, sterile gloves, and a visor",
    },
    ProfessionPreset {
        name: "Mech Technician",
        name_zh: "机甲技师",
        role: "mech technician",
        outfit: "wearing a grease-stained mechanic suit, heavy gloves and clamp tools",
    },
    ProfessionPreset {
        name: "Explorer",
        name_zh: "探险家",
        role: "deep space explorer",
        outfit: "wearing a layered survival suit, straps, rugged fabric, and oxygen tubing",
    },
    ProfessionPreset {
        name: "Diplomat",
        name_zh: "外交官",
        role: "interstellar diplomat",
        outfit: "wearing a tailored formal coat, minimalist futuristic accents",
    },
    ProfessionPreset {
        name: "Android",
        name_zh: "仿生人",
        role: "human-like android",
        outfit: "wearing a clean synthetic bodysuit, subtle panel lines and circuit patterns",
    },
];

const PROFESSION_OUTFITS: &[(&str, &[&str])] = &[
    ("Space Pilot", &["flight suit", "flight jacket", "pressure suit"]),
    ("Starship Engineer", &["utility jumpsuit", "engineering coveralls", "field jacket"]),
    ("Bounty Hunter", &["tactical armor", "long coat", "field jacket"]),
    ("Station Security", &["armored uniform", "tactical armor", "formal uniform"]),
    ("Scientist", &["lab coat", "utility jumpsuit", "synthetic bodysuit"]),
    ("Navigator", &["flight suit", "formal uniform", "flight jacket"]),
    ("Smuggler", &["long coat", "flight jacket", "casual streetwear"]),
    ("Medic", &["medical scrubs", "armored uniform", "utility jumpsuit"]),
    ("Mech Technician", &["engineering coveralls", "utility jumpsuit"]),
    ("Explorer", &["survival suit", "pressure suit", "field jacket"]),
    ("Diplomat", &["formal uniform", "long coat"]),
    ("Android", &["synthetic bodysuit", "formal uniform", "casual streetwear"]),
];

const GENDER: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("Male", "男性"),
    ("Female", "女性"),
    ("Androgynous", "中性"),
    ("Non-binary", "非二元"),
];

const AGE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("Teenage", "少年"),
    ("Young adult", "青年"),
    ("Adult", "成年人"),
    ("Mature adult", "成熟成年人"),
    ("Elderly", "老年"),
];

const FRAMING: &[(&str, &str)] = &[
    ("head-and-shoulders portrait", "头像到肩部"),
    ("bust portrait", "胸像"),
    ("half body portrait", "半身"),
    ("three-quarter body portrait", "四分之三身"),
    ("full body portrait", "全身"),
];

const ASPECT_RATIO: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("1:1 square", "1:1 方形"),
    ("2:3 portrait", "2:3 竖幅"),
    ("3:4 portrait", "3:4 竖幅"),
    ("9:16 vertical", "9:16 竖屏"),
    ("16:9 widescreen", "16:9 宽屏"),
];

const EXPRESSION: &[(&str, &str)] = &[
    ("serious expression", "严肃"),
    ("calm expression", "冷静"),
    ("focused expression", "专注"),
    ("confident expression", "自信"),
];

const GAZE: &[(&str, &str)] = &[
    ("looking at camera", "直视镜头"),
    ("looking slightly off-camera", "略微偏离镜头"),
    ("looking to the side", "侧视"),
];

const BODY_TYPE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("slim build", "纤细"),
    ("athletic build", "运动型"),
    ("lean build", "精瘦"),
    ("muscular build", "肌肉型"),
    ("stocky build", "壮实"),
    ("curvy build", "曲线明显"),
];

const SKIN_TONE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("fair skin tone", "白皙肤色"),
    ("light skin tone", "浅肤色"),
    ("medium skin tone", "中等肤色"),
    ("tan skin tone", "小麦肤色"),
    ("dark skin tone", "深肤色"),
    ("deep skin tone", "黝黑肤色"),
];

const HAIR_STYLE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("short cropped", "超短发"),
    ("pixie cut", "精灵短发"),
    ("short layered", "短层次"),
    ("bob cut", "波波头"),
    ("slicked back", "后梳"),
    ("long straight", "长直发"),
    ("long wavy", "长卷发"),
    ("twin tails", "双马尾"),
    ("high ponytail", "高马尾"),
    ("low ponytail", "低马尾"),
    ("braided", "编发"),
    ("half-up", "半扎发"),
    ("hime cut", "姬发式"),
    ("wolf cut", "狼尾"),
    ("undercut", "两侧剃短"),
    ("shaved sides", "侧剃"),
];

const HAIR_COLOR: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("black", "黑色"),
    ("dark brown", "深棕色"),
    ("brown", "棕色"),
    ("blonde", "金色"),
    ("silver", "银色"),
    ("white", "白色"),
    ("red", "红色"),
    ("blue", "蓝色"),
    ("green", "绿色"),
    ("purple", "紫色"),
];

const BANGS: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("bangs", "有刘海"),
    ("no bangs", "无刘海"),
];

const BANGS_STYLE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("blunt bangs", "齐刘海"),
    ("side-swept bangs", "斜刘海"),
    ("curtain bangs", "八字刘海"),
    ("wispy bangs", "空气刘海"),
    ("parted bangs", "中分刘海"),
];

const FACE_SHAPE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("oval face", "鹅蛋脸"),
    ("round face", "圆脸"),
    ("heart-shaped face", "心形脸"),
    ("square face", "方脸"),
    ("long face", "长脸"),
    ("diamond face", "菱形脸"),
];

const EYE_SIZE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("small eyes", "小眼睛"),
    ("medium eyes", "中等眼睛"),
    ("large eyes", "大眼睛"),
    ("narrow eyes", "细长眼"),
];

const NOSE_SIZE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("small nose", "小鼻子"),
    ("medium nose", "中等鼻子"),
    ("prominent nose", "高挺鼻子"),
    ("button nose", "圆鼻头"),
];

const MOUTH_SHAPE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("thin lips", "薄唇"),
    ("full lips", "丰唇"),
    ("wide mouth", "宽嘴"),
    ("small mouth", "小嘴"),
    ("downturned lips", "下垂嘴角"),
];

const CHEEK_FULLNESS: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("hollow cheeks", "凹陷脸颊"),
    ("defined cheeks", "立体脸颊"),
    ("soft full cheeks", "饱满脸颊"),
];

const JAW_WIDTH: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("narrow jaw", "窄下颌"),
    ("medium jaw", "中等下颌"),
    ("wide jaw", "宽下颌"),
    ("square jaw", "方下颌"),
];

const EYE_COLOR: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("brown", "棕色"),
    ("blue", "蓝色"),
    ("green", "绿色"),
    ("hazel", "榛色"),
    ("amber", "琥珀色"),
    ("gray", "灰色"),
    ("red (cybernetic glow)", "红色（义眼发光）"),
];

const OUTFIT_TYPE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("flight suit", "飞行服"),
    ("flight jacket", "飞行夹克"),
    ("pressure suit", "加压服"),
    ("utility jumpsuit", "工装连体服"),
    ("engineering coveralls", "工程连体服"),
    ("tactical armor", "战术护甲"),
    ("armored uniform", "装甲制服"),
    ("lab coat", "实验服"),
    ("field jacket", "野战夹克"),
    ("long coat", "长大衣"),
    ("formal uniform", "礼服制服"),
    ("medical scrubs", "医护服"),
    ("survival suit", "生存服"),
    ("synthetic bodysuit", "合成紧身衣"),
    ("casual streetwear", "日常便装"),
];

const OUTFIT_PALETTE: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("navy and graphite", "海军蓝与石墨灰"),
    ("charcoal and steel", "炭灰与钢色"),
    ("white and cobalt", "白与钴蓝"),
    ("cream and brass", "米白与黄铜"),
    ("black and neon teal", "黑与霓虹青"),
    ("olive and sand", "橄榄绿与沙色"),
    ("crimson and slate", "深红与板岩灰"),
    ("orange and gunmetal", "橙与枪灰"),
];

const MATERIAL: &[(&str, &str)] = &[
    ("Unspecified", "未指定"),
    ("matte metal", "哑光金属"),
    ("brushed steel", "拉丝钢"),
    ("glossy polymer", "高光聚合物"),
    ("textured fabric", "纹理布料"),
    ("leather", "皮革"),
    ("carbon fiber", "碳纤维"),
    ("kevlar weave", "凯夫拉编织"),
];

const APPEARANCE: &[(&str, &str)] = &[
    ("sharp jawline", "清晰下颌线"),
    ("defined cheekbones", "高颧骨"),
    ("subtle freckles", "浅雀斑"),
    ("beauty mark", "美人痣"),
    ("brow slit", "眉间划痕"),
    ("dark eye circles", "眼下阴影"),
    ("soft blush", "微红腮"),
    ("sharp eyeliner", "锐利眼线"),
    ("glossy lips", "光泽唇彩"),
    ("scar across cheek", "脸颊疤痕"),
    ("nose bridge bandage", "鼻梁贴"),
    ("stern eyebrows", "浓眉"),
    ("hardened eyes", "坚毅眼神"),
    ("asymmetrical bangs", "不对称刘海"),
    ("messy fringe", "凌乱刘海"),
    ("heterochromia", "异色瞳"),
];

const APPAREL_DETAIL: &[(&str, &str)] = &[
    ("tactical harness", "战术背带"),
    ("utility straps", "工具束带"),
    ("pilot gloves", "飞行员手套"),
    ("sleeve patches", "袖章"),
    ("collar insignia", "领章徽记"),
    ("high collar", "高领"),
    ("layered jacket", "叠穿夹克"),
    ("armored vest", "护甲背心"),
    ("panel seams", "拼接线"),
    ("cargo pockets", "工装口袋"),
    ("zipped sleeves", "拉链袖"),
    ("weathered fabric", "磨损布料"),
    ("hooded capelet", "短披风帽"),
    ("rolled sleeves", "卷起袖口"),
];

const ACCESSORY: &[(&str, &str)] = &[
    ("utility belt", "工具腰带"),
    ("shoulder pauldron", "肩甲"),
    ("rank badge", "军衔徽章"),
    ("wrist console", "腕部终端"),
    ("holster rig", "枪套"),
    ("capsule respirator", "呼吸器"),
    ("insignia pin", "徽章别针"),
    ("multi-tool", "多功能工具"),
    ("necklace tag", "识别吊牌"),
    ("ear cuff", "耳骨夹"),
    ("ring set", "戒指组"),
    ("armband", "臂环"),
    ("utility pouch", "工具小包"),
    ("data pad", "数据板"),
    ("camera drone", "侦察无人机"),
    ("headset", "耳机"),
    ("earring", "耳环"),
];

const TECH_DETAIL: &[(&str, &str)] = &[
    ("glowing circuit lines", "发光电路线"),
    ("holographic HUD panel", "全息 HUD 面板"),
    ("luminescent seams", "发光缝线"),
    ("energy core module", "能量核心模块"),
    ("micro-thruster pack", "微型推进器"),
    ("signal antenna", "信号天线"),
    ("magnetic clasps", "磁力搭扣"),
    ("cybernetic eye", "义眼"),
    ("neural interface ports", "神经接口端口"),
    ("data cable ports", "数据线端口"),
    ("optical HUD glow", "光学 HUD 发光"),
    ("powered gauntlet", "动力护臂"),
    ("exo brace", "外骨骼支架"),
    ("mechanical tubing", "机械管线"),
    ("hologram emitter", "全息投影器"),
    ("prosthetic arm", "义肢手臂"),
    ("earpiece communicator", "通讯耳机"),
    ("visor", "护目镜"),
];

const MARKING: &[(&str, &str)] = &[
    ("unit number stencil", "单位编号喷绘"),
    ("warning decals", "警示贴纸"),
    ("barcode tattoo", "条码纹身"),
    ("faction emblem tattoo", "阵营纹章纹身"),
    ("caution stripes", "警戒条纹"),
    ("serial number decal", "序列号贴"),
    ("maintenance markings", "维护标记"),
];

impl Facet for CharacterFacet {
    fn all() -> &'static [Self] {
        ALL
    }

    fn key(self) -> &'static str {
        match self {
            CharacterFacet::Profession => "profession_options",
            CharacterFacet::Framing => "framing_options",
            CharacterFacet::Gender => "gender_options",
            CharacterFacet::Age => "age_options",
            CharacterFacet::AspectRatio => "aspect_ratio_options",
            CharacterFacet::Expression => "expression_options",
            CharacterFacet::Gaze => "gaze_options",
            CharacterFacet::BodyType => "body_type_options",
            CharacterFacet::SkinTone => "skin_tone_options",
            CharacterFacet::HairStyle => "hair_style_options",
            CharacterFacet::HairColor => "hair_color_options",
            CharacterFacet::Bangs => "bangs_options",
            CharacterFacet::BangsStyle => "bangs_style_options",
            CharacterFacet::FaceShape => "face_shape_options",
            CharacterFacet::EyeSize => "eye_size_options",
            CharacterFacet::NoseSize => "nose_size_options",
            CharacterFacet::MouthShape => "mouth_shape_options",
            CharacterFacet::CheekFullness => "cheek_fullness_options",
            CharacterFacet::JawWidth => "jaw_width_options",
            CharacterFacet::EyeColor => "eye_color_options",
            CharacterFacet::OutfitType => "outfit_type_options",
            CharacterFacet::OutfitPalette => "outfit_palette_options",
            CharacterFacet::Material => "material_options",
            CharacterFacet::Appearance => "appearance_features",
            CharacterFacet::ApparelDetail => "apparel_details",
            CharacterFacet::Accessory => "accessories",
            CharacterFacet::TechDetail => "tech_details",
            CharacterFacet::Marking => "markings",
        }
    }

    fn name(self) -> &'static str {
        match self {
            CharacterFacet::Profession => "profession",
            CharacterFacet::Framing => "framing",
            CharacterFacet::Gender => "gender",
            CharacterFacet::Age => "age",
            CharacterFacet::AspectRatio => "aspect_ratio",
            CharacterFacet::Expression => "expression",
            CharacterFacet::Gaze => "gaze",
            CharacterFacet::BodyType => "body_type",
            CharacterFacet::SkinTone => "skin_tone",
            CharacterFacet::HairStyle => "hair_style",
            CharacterFacet::HairColor => "hair_color",
            CharacterFacet::Bangs => "bangs",
            CharacterFacet::BangsStyle => "bangs_style",
            CharacterFacet::FaceShape => "face_shape",
            CharacterFacet::EyeSize => "eye_size",
            CharacterFacet::NoseSize => "nose_size",
            CharacterFacet::MouthShape => "mouth_shape",
            CharacterFacet::CheekFullness => "cheek_fullness",
            CharacterFacet::JawWidth => "jaw_width",
            CharacterFacet::EyeColor => "eye_color",
            CharacterFacet::OutfitType => "outfit_type",
            CharacterFacet::OutfitPalette => "outfit_palette",
            CharacterFacet::Material => "material",
            CharacterFacet::Appearance => "appearance",
            CharacterFacet::ApparelDetail => "apparel",
            CharacterFacet::Accessory => "accessories",
            CharacterFacet::TechDetail => "tech",
            CharacterFacet::Marking => "markings",
        }
    }

    fn default_pairs(self) -> Vec<OptionPair> {
        match self {
            CharacterFacet::Profession => PROFESSION_PRESETS
                .iter()
                .map(|p| OptionPair::new(p.name, p.name_zh))
                .collect(),
            CharacterFacet::Framing => pairs(FRAMING),
            CharacterFacet::Gender => pairs(GENDER),
            CharacterFacet::Age => pairs(AGE),
            CharacterFacet::AspectRatio => pairs(ASPECT_RATIO),
            CharacterFacet::Expression => pairs(EXPRESSION),
            CharacterFacet::Gaze => pairs(GAZE),
            CharacterFacet::BodyType => pairs(BODY_TYPE),
            CharacterFacet::SkinTone => pairs(SKIN_TONE),
            CharacterFacet::HairStyle => pairs(HAIR_STYLE),
            CharacterFacet::HairColor => pairs(HAIR_COLOR),
            CharacterFacet::Bangs => pairs(BANGS),
            CharacterFacet::BangsStyle => pairs(BANGS_STYLE),
            CharacterFacet::FaceShape => pairs(FACE_SHAPE),
            CharacterFacet::EyeSize => pairs(EYE_SIZE),
            CharacterFacet::NoseSize => pairs(NOSE_SIZE),
            CharacterFacet::MouthShape => pairs(MOUTH_SHAPE),
            CharacterFacet::CheekFullness => pairs(CHEEK_FULLNESS),
            CharacterFacet::JawWidth => pairs(JAW_WIDTH),
            CharacterFacet::EyeColor => pairs(EYE_COLOR),
            CharacterFacet::OutfitType => pairs(OUTFIT_TYPE),
            CharacterFacet::OutfitPalette => pairs(OUTFIT_PALETTE),
            CharacterFacet::Material => pairs(MATERIAL),
            CharacterFacet::Appearance => pairs(APPEARANCE),
            CharacterFacet::ApparelDetail => pairs(APPAREL_DETAIL),
            CharacterFacet::Accessory => pairs(ACCESSORY),
            CharacterFacet::TechDetail => pairs(TECH_DETAIL),
            CharacterFacet::Marking => pairs(MARKING),
        }
    }

    fn is_multi_select(self) -> bool {
        matches!(
            self,
            CharacterFacet::Appearance
                | CharacterFacet::ApparelDetail
                | CharacterFacet::Accessory
                | CharacterFacet::TechDetail
                | CharacterFacet::Marking
        )
    }

    fn default_profession_outfits() -> BTreeMap<String, Vec<String>> {
        PROFESSION_OUTFITS
            .iter()
            .map(|(profession, outfits)| {
                (
                    profession.to_string(),
                    outfits.iter().map(|o| o.to_string()).collect(),
                )
            })
            .collect()
    }
}

impl OptionCatalog<CharacterFacet> {
    /// Outfit-type labels allowed for a profession.
    ///
    /// Falls back to the full list when the profession has no mapping.
    pub fn outfit_type_options(&self, profession: &str, lang: Lang) -> Vec<DisplayLabel> {
        match self.profession_outfits().get(profession.trim()) {
            Some(allowed) => self.filtered_options(CharacterFacet::OutfitType, allowed, lang),
            None => self.get_options(CharacterFacet::OutfitType, lang),
        }
    }
}
