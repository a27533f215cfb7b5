/// Replies the simulated assistant picks from, in catalog order.
pub const CANNED_REPLIES: [&str; 5] = [
    "That's a wonderful idea! For wedding planning, I'd recommend starting with your budget and guest count. This will help guide all other decisions.",
    "I love helping with wedding details! Let me suggest some beautiful options that would work perfectly for your special day.",
    "Wedding planning can feel overwhelming, but we'll take it step by step. What aspect of your wedding are you most excited about?",
    "That's such a romantic choice! Have you considered how this might complement your overall wedding theme and venue?",
    "Great question! Based on current wedding trends and timeless elegance, here are some ideas that might inspire you...",
];

/// Opening assistant message seeded when a chat is started explicitly.
pub const GREETING: &str = "Hi! I'm your Wedding Ease AI assistant. I'm here to help you plan your perfect wedding. What would you like to start with?";

/// Prompts offered before the user has said anything.
pub const QUICK_SUGGESTIONS: [&str; 4] = [
    "Help me set a wedding budget",
    "What's trending in 2024 weddings?",
    "I need venue suggestions",
    "Help with invitation wording",
];
