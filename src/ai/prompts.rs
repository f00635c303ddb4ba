//! Prompt templates. Each builder fills caller-supplied fields into a fixed prompt.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::entities::Plan;

/// Brief for hashtag generation
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HashtagBrief {
    /// Kind of run (street, trail, track...)
    #[serde(rename = "type")]
    pub run_type: String,
    pub objective: String,
    /// City or region the runner trains in
    pub city: String,
    pub level: String,
    /// Post format (photo, reel, Strava activity...)
    pub content_type: String,
}

/// Inputs for a training plan
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingBrief {
    pub objective: String,
    pub level: String,
    /// Training days available per week
    pub days: u32,
    /// Minutes available per workout
    pub time_per_workout: u32,
    #[serde(default)]
    pub injuries: String,
}

/// Inputs for a nutrition strategy
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionBrief {
    /// Workout intensity (light, moderate, intense)
    #[serde(rename = "type")]
    pub training_type: String,
    pub distance: String,
    pub objective: String,
    /// Time of day the workout happens
    pub time: String,
    pub level: String,
    #[serde(default)]
    pub restrictions: String,
    /// Current meals, one per line. Built from the caller's logs when omitted.
    #[serde(default)]
    pub current_nutrition: Option<String>,
}

pub fn hashtags_prompt(brief: &HashtagBrief) -> String {
    format!(
        "Você é um especialista em crescimento orgânico para corredores no Instagram, TikTok e Strava.\n\
         \n\
         Gere 30 hashtags estratégicas baseadas nas seguintes informações:\n\
         \n\
         Tipo de corrida: {}\n\
         Objetivo: {}\n\
         Cidade/Região: {}\n\
         Nível do atleta: {}\n\
         Tipo de conteúdo: {}\n\
         \n\
         Organize as hashtags em 3 blocos:\n\
         \n\
         1️⃣ Alto alcance (hashtags grandes)\n\
         2️⃣ Médio alcance (hashtags médias)\n\
         3️⃣ Nichadas e específicas\n\
         \n\
         Regras:\n\
         - Misture hashtags em português e inglês.\n\
         - Não repita hashtags.\n\
         - Use hashtags reais e usadas por corredores.\n\
         - Entregue apenas as hashtags organizadas por bloco.",
        brief.run_type, brief.objective, brief.city, brief.level, brief.content_type
    )
}

pub fn caption_prompt() -> String {
    "Você é um especialista em marketing esportivo para corredores.\n\
     \n\
     Analise a imagem enviada e descreva:\n\
     - Ambiente\n\
     - Emoção transmitida\n\
     - Tipo de corrida\n\
     - Nível aparente do atleta\n\
     - Clima da cena\n\
     \n\
     Depois gere:\n\
     1️⃣ Uma legenda inspiradora para Instagram (até 2200 caracteres)\n\
     2️⃣ Uma legenda curta e impactante para TikTok\n\
     3️⃣ Uma descrição técnica para Strava\n\
     4️⃣ Uma CTA estratégica para engajamento\n\
     5️⃣ 15 hashtags relevantes\n\
     \n\
     Tom: Motivador, autêntico e focado em performance.\n\
     Evite frases genéricas. Seja específico com base na imagem."
        .to_string()
}

pub fn training_plan_prompt(brief: &TrainingBrief) -> String {
    let injuries = if brief.injuries.trim().is_empty() {
        "Nenhuma"
    } else {
        brief.injuries.trim()
    };

    format!(
        "Você é um treinador profissional de corrida especializado em performance.\n\
         \n\
         Crie um plano de treino personalizado baseado em:\n\
         \n\
         Objetivo: {}\n\
         Nível atual: {}\n\
         Dias disponíveis por semana: {}\n\
         Tempo disponível por treino: {} minutos\n\
         Histórico de lesões: {}\n\
         \n\
         Estruture:\n\
         - Treino semanal detalhado\n\
         - Ritmo sugerido\n\
         - Tipo de treino (intervalado, rodagem, longão)\n\
         - Dicas técnicas\n\
         - Dicas de recuperação\n\
         \n\
         Use linguagem clara e prática.",
        brief.objective, brief.level, brief.days, brief.time_per_workout, injuries
    )
}

/// The only prompt that depends on the subscriber's tier.
pub fn nutrition_strategy_prompt(brief: &NutritionBrief, current_nutrition: &str, plan: Plan) -> String {
    let restrictions = if brief.restrictions.trim().is_empty() {
        "Nenhuma"
    } else {
        brief.restrictions.trim()
    };
    let current_nutrition = if current_nutrition.trim().is_empty() {
        "Nenhuma refeição registrada"
    } else {
        current_nutrition.trim()
    };

    let mut prompt = format!(
        "Você é um nutricionista esportivo especializado em corredores.\n\
         \n\
         Monte uma estratégia nutricional para o treino descrito abaixo:\n\
         \n\
         Tipo de treino: {}\n\
         Distância: {}\n\
         Objetivo: {}\n\
         Horário do treino: {}\n\
         Nível do atleta: {}\n\
         Restrições alimentares: {}\n\
         \n\
         Alimentação atual do atleta:\n\
         {}\n\
         \n\
         Entregue:\n\
         - O que comer antes do treino e quanto tempo antes\n\
         - O que consumir durante o treino, se necessário\n\
         - O que comer na recuperação pós-treino\n\
         - Ajustes sugeridos na alimentação atual\n",
        brief.training_type,
        brief.distance,
        brief.objective,
        brief.time,
        brief.level,
        restrictions,
        current_nutrition
    );

    match plan {
        Plan::Elite => prompt.push_str(
            "\nComo atleta Elite, inclua também:\n\
             - Distribuição de macronutrientes em gramas por refeição\n\
             - Cronograma de refeições hora a hora no dia do treino\n\
             - Protocolo de suplementação (cafeína, carboidrato em gel, eletrólitos) com dosagens\n\
             - Estratégia de hidratação com volumes por hora de treino\n",
        ),
        Plan::Pro => prompt.push_str(
            "\nComo atleta Pro, inclua também:\n\
             - Estratégia de hidratação antes, durante e depois do treino\n\
             - Sugestão de lanches práticos para a rotina\n",
        ),
        Plan::Starter => prompt.push_str(
            "\nMantenha a estratégia simples e objetiva. Ao final, mencione em uma frase que \
             os planos Pro e Elite oferecem estratégias detalhadas de hidratação e suplementação.\n",
        ),
    }

    prompt.push_str(
        "\nUse linguagem clara e prática. Lembre o atleta de validar a estratégia com um nutricionista.",
    );
    prompt
}
