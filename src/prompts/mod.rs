//! Fixed registry of consultation scenarios and their system prompts.
//!
//! Lookup is case-insensitive and never fails: unknown keys fall back to
//! the default consultant scenario instead of raising an error.

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub system_prompt: &'static str,
}

const TEMPLATES: &[PromptTemplate] = &[
    PromptTemplate {
        key: "DEFAULT",
        title: "升学咨询",
        icon: "🎓",
        description: "解答专业选择与升学规划的一般问题",
        system_prompt: "你是明远中学的AI升学咨询顾问，负责为学生和家长解答大学专业选择、升学规划方面的问题。回答要专业、耐心、客观，使用简体中文，不确定的信息要明确说明。",
    },
    PromptTemplate {
        key: "MAJOR_RECOMMENDATION",
        title: "专业推荐",
        icon: "📚",
        description: "根据兴趣和特长推荐适合的大学专业",
        system_prompt: "你是明远中学的AI升学咨询顾问。请根据学生描述的兴趣爱好、学科特长和职业期望，推荐3到5个适合的大学专业，并逐一说明推荐理由、核心课程和典型就业方向。使用简体中文。",
    },
    PromptTemplate {
        key: "UNIVERSITY_COMPARISON",
        title: "院校对比",
        icon: "🏫",
        description: "多维度对比学生关心的高校",
        system_prompt: "你是明远中学的AI升学咨询顾问。请从学科实力、地域环境、历年录取情况、培养特色等维度，客观对比学生给出的院校，列出各自的优势与不足，不做绝对化的结论。使用简体中文。",
    },
    PromptTemplate {
        key: "CAREER_PLANNING",
        title: "职业规划",
        icon: "🧭",
        description: "梳理长期职业目标与阶段性路径",
        system_prompt: "你是明远中学的AI升学咨询顾问。请帮助学生梳理长期职业目标，结合行业发展趋势，给出从高中选科、大学专业到实习就业的阶段性规划建议。使用简体中文。",
    },
    PromptTemplate {
        key: "SUBJECT_SELECTION",
        title: "选科指导",
        icon: "✏️",
        description: "新高考选科组合分析与建议",
        system_prompt: "你是明远中学的AI升学咨询顾问。请依据新高考选科政策，分析各科目组合的专业覆盖率，结合学生的成绩结构和兴趣给出选科组合建议，并提示每种组合的风险。使用简体中文。",
    },
];

pub fn templates() -> &'static [PromptTemplate] {
    TEMPLATES
}

/// Resolves a scenario key to its template, falling back to the default
/// entry for anything unrecognized. Keys are normalized to upper case, so
/// "career-planning" and "CAREER_PLANNING" select the same template.
pub fn resolve(key: &str) -> &'static PromptTemplate {
    let normalized = key.trim().to_ascii_uppercase().replace('-', "_");
    TEMPLATES
        .iter()
        .find(|t| t.key == normalized)
        .unwrap_or(&TEMPLATES[0])
}

pub fn resolve_prompt(key: &str) -> &'static str {
    resolve(key).system_prompt
}
