//! Reply templates, wellness tips and validation lines.

use std::collections::HashMap;

use crate::brain::{Emotion, Intent};

const SADNESS_REPLIES: &[&str] = &[
    "I hear that you're feeling down right now, and that's completely valid. It's okay to feel sad sometimes, it's a natural part of being human. Would you like to talk about what's making you feel this way? I'm here to listen.",
    "Sadness can feel overwhelming, but remember that feelings are temporary. What you're experiencing right now won't last forever. What's one small thing that brought you even a tiny bit of joy today?",
    "It sounds like you're carrying something heavy right now. That takes courage to share. Let's explore what's behind these feelings; sometimes understanding them helps us move through them.",
    "I'm sorry you're hurting. Please know that your feelings matter, and you're not alone in feeling this way. What support would help you most right now?",
];

const ANXIETY_REPLIES: &[&str] = &[
    "Anxiety can be really intense, and I appreciate you sharing that with me. Your worries are valid, but many of them might not happen. Let's focus on what you can control right now.",
    "Feeling anxious is your mind trying to protect you, even if it sometimes feels overwhelming. Try taking some deep breaths: in for 4, hold for 4, out for 6. This can help calm your nervous system.",
    "Anxiety loves to tell us 'what if' stories. But you're here, you're safe, and you've gotten through difficult moments before. What's one thing you know for sure is true right now?",
    "I understand anxiety is hard. It's like your mind is running ahead of you. Let's bring it back to the present moment. What's one thing you can see, touch, or hear right now?",
];

const ANGER_REPLIES: &[&str] = &[
    "Your anger is telling you that something matters to you. Instead of pushing it away, let's explore what's beneath it. What do you really need right now?",
    "Anger is valid, and it's okay to feel it. The key is channeling it constructively. Sometimes exercise, creative expression, or just letting it out helps. What feels right for you?",
    "I hear that you're frustrated or upset. That's understandable. Take a moment to breathe. What would help you feel more in control right now?",
    "Anger often comes from a place of pain or injustice. You deserve to feel heard and understood. What would make you feel better about this situation?",
];

const JOY_REPLIES: &[&str] = &[
    "That's wonderful! I'm so happy to hear you're feeling joy. These moments are precious. What made you happy today?",
    "Joy is beautiful, and I'm honored you're sharing this positive moment with me. How does it feel right now?",
    "This is amazing! Savor this moment. What does happiness mean to you right now?",
    "Your joy is contagious! I love hearing about the good things in your life. What do you want to remember about this feeling?",
];

const STRESS_REPLIES: &[&str] = &[
    "Stress can feel like too much on your shoulders. Let's break it down. What's the one thing stressing you most right now that we can address together?",
    "I hear you're under pressure. That's really tough. You're capable of handling more than you think. What would help you feel more in control?",
    "Stress is your body's way of telling you something needs attention. What's one small step you could take to reduce the pressure?",
    "You sound stressed, and that's understandable given everything you're dealing with. Let's focus on what you can influence. What's one thing you can let go of today?",
];

const CONFUSION_REPLIES: &[&str] = &[
    "Feeling confused is often a sign that you're thinking deeply about something. Let's try to untangle this together. What's the core issue that's confusing you?",
    "Sometimes clarity comes from talking it out. I'm here to help you work through this confusion. What's making you uncertain right now?",
    "Confusion is okay, it means you're exploring new territory. Let's break this down into smaller, clearer pieces. What's one thing you do understand about the situation?",
    "I understand feeling lost. Let's take a step back and look at this from different angles. What would help you see things more clearly?",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "Thanks for sharing. It sounds like you're in a calm place right now. Is there anything on your mind that you'd like to explore or talk about?",
    "I'm here to listen to whatever's on your heart. What would be good to talk about today?",
    "You seem to be in a balanced place. That's great. Is there anything specific on your mind, or would you just like to chat?",
    "I'm glad you reached out. Whether you want to dive deep or just have a conversation, I'm here for you. What's on your mind?",
];

const LOVE_REPLIES: &[&str] = &[
    "That's beautiful. Feelings of love and connection are so powerful. Tell me more about what you're experiencing. What does this love mean to you?",
    "Love is such a precious emotion. I'm glad you're feeling it. What brings out these feelings of love in you?",
    "That's wonderful that you're experiencing love. Whether it's for a person, a place, or even yourself, that's something special. What would you like to express about it?",
    "Love is one of the most healing emotions. What aspect of this feeling would you like to explore?",
];

const LONELINESS_REPLIES: &[&str] = &[
    "Loneliness is a painful feeling, but you're not alone in feeling it. Many people experience this. What's making you feel isolated right now?",
    "Loneliness is telling you that you need connection, and that's a valid need. You're reaching out, and that's brave. What kind of connection would you like more of?",
    "I hear that you're feeling lonely. That's a difficult emotion, but it's also temporary. What's one person or thing you feel connected to?",
    "Loneliness can feel overwhelming, but reaching out like you're doing now is a step toward connection. What would make you feel more connected?",
];

const FEAR_REPLIES: &[&str] = &[
    "Fear is a protective emotion, but sometimes it can hold us back. What are you afraid of? Let's explore it together.",
    "Fear is natural, especially when facing the unknown. You're braver than you think. What specifically is scaring you right now?",
    "I understand you're afraid. Fear often grows when we face it alone. Talking about it can make a difference. What would make you feel safer?",
    "Fear can feel paralyzing, but you've overcome challenges before. What's one small step you could take to feel more in control?",
];

const DISGUST_REPLIES: &[&str] = &[
    "It sounds like something has really bothered you. That's a strong reaction, and it's valid. What's causing this feeling?",
    "Your disgust is telling you that something doesn't align with your values. That's important information. What specifically is triggering this feeling?",
    "Disgust is a signal that something feels wrong to you. Let's explore what that is so you can understand it better.",
    "I hear that you're feeling repulsed or upset. That's a real emotion. What would let you process this and move forward?",
];

const SURPRISE_REPLIES: &[&str] = &[
    "That sounds unexpected! Surprises can take a moment to sink in. How are you feeling about it now?",
    "Wow, that's quite something. Is this a good surprise, a hard one, or a bit of both?",
    "Surprises can shake up our sense of what's normal. What's going through your mind right now?",
    "That must have caught you off guard. Take your time. What part of it stands out most to you?",
];

const ASK_ADVICE_FOLLOW_UPS: &[&str] = &[
    "Since you asked for guidance, here's a thought: take what resonates with you and leave the rest. You know yourself best.",
    "Here's what I'd suggest based on what you've shared, though ultimately the best path is the one that feels right to you.",
    "Asking for advice is a proactive step. Let me offer a few perspectives to help you think this through.",
    "I'm glad you asked. I can share some ideas that might help, but trust your instincts too.",
];

const SEEKING_SUPPORT_FOLLOW_UPS: &[&str] = &[
    "I'm so glad you reached out. You deserve support, and you're doing the right thing by asking for help. I'm here for you.",
    "Seeking support is a sign of strength, not weakness. How can I best support you right now?",
    "You're brave for reaching out. Let's work through this together. What kind of support would help you most?",
    "Thank you for trusting me with this. You're not alone, and help is available.",
];

const SADNESS_TIPS: &[&str] = &[
    "Reach out to someone you trust. Connection is healing, and you don't have to feel this alone.",
    "Engage in an activity you enjoy, even if you don't feel like it. Moving through sadness takes small actions.",
    "Be gentle with yourself. Sadness is part of life, and you'll get through this.",
    "Consider talking to a therapist. Professional support can help you process these feelings.",
];

const ANXIETY_TIPS: &[&str] = &[
    "Practice grounding: notice 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
    "Progressive muscle relaxation helps calm anxiety. Tense and release each muscle group for relief.",
    "Limit caffeine and get regular exercise. These affect anxiety levels significantly.",
    "Remember: anxiety is temporary, and you've handled difficult feelings before.",
];

const STRESS_TIPS: &[&str] = &[
    "Break your tasks into smaller steps. Big projects feel less overwhelming when divided.",
    "Practice saying 'no' to things that don't serve you. Boundaries protect your peace.",
    "Schedule time for relaxation. Even 30 minutes of self-care can reset your nervous system.",
    "Reach out for help. You don't have to manage everything alone.",
];

const ANGER_TIPS: &[&str] = &[
    "Physical activity is good for anger: run, exercise, or punch a pillow to release the intensity.",
    "Express your feelings creatively. Write, draw, or play music to channel your anger constructively.",
    "Take time to cool down before responding. This prevents saying things you might regret.",
    "Identify what's really bothering you underneath the anger. Often anger masks hurt or fear.",
];

const LONELINESS_TIPS: &[&str] = &[
    "Reach out to someone: text a friend, join a group, or volunteer. Connection heals loneliness.",
    "Be your own best friend. Self-compassion is the foundation of healthy relationships.",
    "Pursue hobbies and interests. This helps you meet like-minded people and feel fulfilled.",
    "Remember: this feeling is temporary, and you're worthy of connection.",
];

const FEAR_TIPS: &[&str] = &[
    "Face your fear gradually. Small steps build courage.",
    "Prepare and plan. Often, anxiety decreases when you feel prepared.",
    "Remember past successes. You've overcome challenges before.",
    "Share your fears with someone you trust. Spoken out loud, they often feel less overwhelming.",
];

const GENERAL_TIPS: &[&str] = &[
    "Take a 5-minute breathing exercise: breathe in for 4 counts, hold for 4, exhale for 6.",
    "Step outside for some fresh air and sunlight. Even 5 minutes can lift your mood.",
    "Try a short 10-minute walk. Movement helps process emotions.",
    "Write in a journal. Getting your thoughts on paper helps you understand them and release tension.",
    "Connect with someone you trust and share what you're feeling.",
    "Do something kind for yourself: make tea, take a bath, listen to music you love.",
    "Try a short meditation. Even 3-5 minutes can calm your mind.",
    "Move your body in a way you enjoy: dance, stretch, exercise.",
    "Limit caffeine and stay hydrated. What we consume affects our mood.",
    "Practice gratitude. List 3 things you're grateful for, no matter how small.",
    "Get enough sleep. Emotional resilience improves dramatically with proper rest.",
    "Reach out to a therapist or counselor. Professional support is valuable and nothing to be ashamed of.",
];

const PROCESSING_FALLBACK_REPLY: &str = "I'm having a moment of trouble processing that, but I'm here for you. Could you share what you're feeling in a different way? Or ask me anything else on your mind.";

fn validation_line(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Sadness => "Your sadness is valid. It's okay to feel this way.",
        Emotion::Anxiety => "Your anxiety is real, and it's understandable.",
        Emotion::Anger => "Your anger is valid. You have the right to feel upset.",
        Emotion::Joy => "Your happiness is wonderful. Celebrate this feeling!",
        Emotion::Stress => "Your stress is real, and you're handling a lot.",
        Emotion::Confusion => "It's okay to feel confused. This is part of growth.",
        Emotion::Neutral => "You're in a balanced place. That's healthy.",
        Emotion::Love => "Love is beautiful. Treasure this feeling.",
        Emotion::Loneliness => "Loneliness is painful, but you're not truly alone.",
        Emotion::Fear => "Your fear makes sense. Acknowledge it and move forward.",
        Emotion::Disgust => "Your boundaries are valid. You have the right to feel repulsed.",
        Emotion::Surprise => "Surprises can be disorienting. That's completely normal.",
    }
}

fn default_replies(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Sadness => SADNESS_REPLIES,
        Emotion::Anxiety => ANXIETY_REPLIES,
        Emotion::Anger => ANGER_REPLIES,
        Emotion::Joy => JOY_REPLIES,
        Emotion::Stress => STRESS_REPLIES,
        Emotion::Confusion => CONFUSION_REPLIES,
        Emotion::Neutral => NEUTRAL_REPLIES,
        Emotion::Love => LOVE_REPLIES,
        Emotion::Loneliness => LONELINESS_REPLIES,
        Emotion::Fear => FEAR_REPLIES,
        Emotion::Disgust => DISGUST_REPLIES,
        Emotion::Surprise => SURPRISE_REPLIES,
    }
}

/// Only intents that get a follow-up appended have one.
fn default_follow_ups(intent: Intent) -> Option<&'static [&'static str]> {
    match intent {
        Intent::AskAdvice => Some(ASK_ADVICE_FOLLOW_UPS),
        Intent::SeekingSupport => Some(SEEKING_SUPPORT_FOLLOW_UPS),
        Intent::Venting | Intent::GeneralConversation => None,
    }
}

fn default_tips(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Sadness => Some(SADNESS_TIPS),
        Emotion::Anxiety => Some(ANXIETY_TIPS),
        Emotion::Stress => Some(STRESS_TIPS),
        Emotion::Anger => Some(ANGER_TIPS),
        Emotion::Loneliness => Some(LONELINESS_TIPS),
        Emotion::Fear => Some(FEAR_TIPS),
        _ => None,
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// All reply text the selector draws from. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    replies: HashMap<Emotion, Vec<String>>,
    follow_ups: HashMap<Intent, Vec<String>>,
    tips: HashMap<Emotion, Vec<String>>,
    general_tips: Vec<String>,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            replies: Emotion::ALL
                .iter()
                .map(|e| (*e, owned(default_replies(*e))))
                .collect(),
            follow_ups: Intent::ALL
                .iter()
                .filter_map(|i| default_follow_ups(*i).map(|lines| (*i, owned(lines))))
                .collect(),
            tips: Emotion::ALL
                .iter()
                .filter_map(|e| default_tips(*e).map(|tips| (*e, owned(tips))))
                .collect(),
            general_tips: owned(GENERAL_TIPS),
        }
    }
}

impl ResponseCatalog {
    /// Replace the reply templates of one emotion. Empty lists are ignored.
    pub fn with_replies(mut self, emotion: Emotion, replies: Vec<String>) -> Self {
        if !replies.is_empty() {
            self.replies.insert(emotion, replies);
        }
        self
    }

    /// Replace the follow-up sentences of one intent. Empty lists are ignored.
    pub fn with_follow_ups(mut self, intent: Intent, follow_ups: Vec<String>) -> Self {
        if !follow_ups.is_empty() {
            self.follow_ups.insert(intent, follow_ups);
        }
        self
    }

    /// Reply templates for an emotion, falling back to the neutral set.
    pub fn replies(&self, emotion: Emotion) -> &[String] {
        self.replies
            .get(&emotion)
            .or_else(|| self.replies.get(&Emotion::Neutral))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Intent-specific follow-up sentences. Empty for intents without any.
    pub fn follow_ups(&self, intent: Intent) -> &[String] {
        self.follow_ups
            .get(&intent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Wellness tips for an emotion, or the general list.
    pub fn tips(&self, emotion: Emotion) -> &[String] {
        self.tips
            .get(&emotion)
            .map(Vec::as_slice)
            .unwrap_or(&self.general_tips)
    }

    pub fn validation(&self, emotion: Emotion) -> &'static str {
        validation_line(emotion)
    }

    pub fn processing_fallback_reply(&self) -> &'static str {
        PROCESSING_FALLBACK_REPLY
    }
}
