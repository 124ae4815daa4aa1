//! Canned reply texts keyed by topic and sub-intent

use super::keywords::{Detail, Topic};

/// Readiness banner served on `GET /`
pub const READY: &str = " ChatBot API - Ready to help with your travel questions!";

/// Reply when the message is missing or blank
pub const EMPTY_MESSAGE: &str = "I didn't receive your message. Could you please try again?";

/// Reply when a request could not be processed
pub const TECHNICAL_DIFFICULTIES: &str =
    "I'm experiencing some technical difficulties. Please try again in a moment.";

/// Reply text for a topic and optional sub-intent
///
/// Details that do not belong to `topic` fall back to the topic's generic text.
pub const fn template_for(topic: Topic, detail: Option<Detail>) -> &'static str {
    match (topic, detail) {
        (Topic::Greeting, _) => GREETING,
        (Topic::Flight, Some(Detail::Delay)) => FLIGHT_DELAY,
        (Topic::Flight, Some(Detail::Boarding)) => FLIGHT_BOARDING,
        (Topic::Flight, Some(Detail::Cancellation)) => FLIGHT_CANCELLED,
        (Topic::Flight, _) => FLIGHT,
        (Topic::Luggage, Some(Detail::Lost)) => LUGGAGE_LOST,
        (Topic::Luggage, Some(Detail::Tracking)) => LUGGAGE_TRACKING,
        (Topic::Luggage, _) => LUGGAGE,
        (Topic::Account, Some(Detail::PasswordReset)) => ACCOUNT_PASSWORD,
        (Topic::Account, Some(Detail::SignUp)) => ACCOUNT_SIGN_UP,
        (Topic::Account, _) => ACCOUNT,
        (Topic::Features, _) => FEATURES,
        (Topic::Travel, _) => TRAVEL,
        (Topic::Help, _) => HELP,
        (Topic::Thanks, _) => THANKS,
        (Topic::Unknown, _) => UNKNOWN,
    }
}

const GREETING: &str = "Hello! ✈️ Welcome to EasyFly! I'm here to help you with:\n\n\
✈️ Flight information and boarding passes\n\
🧳 Baggage tracking and pickup status\n\
🔔 Notifications and travel alerts\n\
👤 Account and profile management\n\
🌍 General travel assistance\n\n\
What would you like to know about your travel experience?";

const FLIGHT_DELAY: &str = "✈️ Flight delays can be frustrating! Here's how EasyFly helps:\n\n\
📱 **Real-time Updates**: Get instant notifications about delays\n\
🔄 **Automatic Rebooking**: We'll help you find alternative flights\n\
📍 **Gate Changes**: Immediate alerts if your gate changes\n\
🎫 **Digital Boarding Pass**: Always accessible on your phone\n\n\
**Current Flight Status:**\n\
• Check your 'Flights' page for real-time updates\n\
• Enable notifications for instant alerts\n\
• Contact airline directly for rebooking options\n\n\
Need help with a specific flight delay?";

const FLIGHT_BOARDING: &str = "🎫 Boarding and Check-in made easy with EasyFly:\n\n\
**Mobile Check-in:**\n\
• Check in 24 hours before departure\n\
• Get your digital boarding pass instantly\n\
• Skip the airport check-in lines\n\n\
**Boarding Process:**\n\
• Arrive at gate 30 minutes before boarding\n\
• Listen for boarding announcements\n\
• Have your boarding pass and ID ready\n\
• Board according to your group number\n\n\
**Gate Information:**\n\
• Check your boarding pass for gate number\n\
• Gates can change - watch for notifications\n\
• Allow time to walk to your gate\n\n\
Need help finding your gate or boarding pass?";

const FLIGHT_CANCELLED: &str =
    "❌ Flight cancellations are stressful, but we're here to help:\n\n\
**Immediate Steps:**\n\
• Check EasyFly notifications for rebooking options\n\
• Contact your airline's customer service\n\
• Know your passenger rights for compensation\n\n\
**EasyFly Features:**\n\
• Instant cancellation notifications\n\
• Alternative flight suggestions\n\
• Rebooking assistance through the app\n\n\
**Your Rights:**\n\
• Full refund or alternative flight\n\
• Meal vouchers for long delays\n\
• Hotel accommodation if overnight\n\n\
Would you like help rebooking or finding alternatives?";

const FLIGHT: &str =
    "✈️ I'd love to help with your flight questions! Here's what I can assist with:\n\n\
🎫 **Flight Management:**\n\
• View all your flights in one place\n\
• Digital boarding passes with QR codes\n\
• Real-time flight status updates\n\
• Gate and seat information\n\n\
📱 **Smart Features:**\n\
• Mobile check-in reminders\n\
• Boarding notifications\n\
• Flight delay alerts\n\
• Gate change notifications\n\n\
**Quick Actions:**\n\
• Say 'show my flights' to view your bookings\n\
• Ask about 'flight delays' for delay help\n\
• Need 'boarding pass' assistance\n\n\
What specific flight information do you need?";

const LUGGAGE_LOST: &str =
    "🧳 Lost luggage? Don't worry, I'll help you track it down:\n\n\
**Immediate Steps:**\n\
1. Report to airline's baggage service counter\n\
2. Get a baggage claim reference number\n\
3. Keep your baggage claim ticket\n\
4. Take photos of your luggage if you have them\n\n\
**EasyFly Tracking:**\n\
• Check 'Luggage' page for real-time location\n\
• Get notifications when bag is found\n\
• Track delivery status to your location\n\n\
**What Airlines Provide:**\n\
• Compensation for essential items\n\
• Daily allowance for necessities\n\
• Free delivery when bag is found\n\n\
Need help filing a lost luggage report?";

const LUGGAGE_TRACKING: &str = "📍 Track your luggage easily with EasyFly:\n\n\
**Real-time Tracking:**\n\
• Live location updates from check-in to pickup\n\
• Baggage carousel notifications\n\
• Pickup ready alerts\n\n\
**Tracking Information:**\n\
• Current location (sorting, loading, carousel)\n\
• Expected pickup time\n\
• Carousel number and terminal\n\
• Last update timestamp\n\n\
**How to Track:**\n\
1. Go to 'Luggage' page in EasyFly\n\
2. View your baggage numbers\n\
3. Check status and location\n\
4. Get pickup notifications\n\n\
Your bags are tracked from the moment you check them in!";

const LUGGAGE: &str = "🧳 Luggage management made simple with EasyFly:\n\n\
**Smart Tracking Features:**\n\
• Real-time baggage location updates\n\
• Pickup notifications when bags arrive\n\
• Carousel and terminal information\n\
• Delivery status tracking\n\n\
**Baggage Tips:**\n\
• Always keep your baggage claim ticket\n\
• Take photos of your luggage before travel\n\
• Pack essentials in carry-on\n\
• Check airline baggage policies\n\n\
**EasyFly Luggage Page:**\n\
• View all your checked bags\n\
• Track pickup status\n\
• Get arrival notifications\n\n\
What specific luggage help do you need?";

const ACCOUNT_PASSWORD: &str = "🔐 Password reset help for EasyFly:\n\n\
**Reset Your Password:**\n\
1. Go to the Sign In page\n\
2. Click 'Forgot Password?'\n\
3. Enter your email address\n\
4. Check your email for reset instructions\n\
5. Follow the link to create a new password\n\n\
**Password Security Tips:**\n\
• Use at least 8 characters\n\
• Include numbers and special characters\n\
• Avoid common words or personal info\n\
• Don't reuse passwords from other accounts\n\n\
**Account Security:**\n\
• Enable two-factor authentication\n\
• Log out from shared devices\n\
• Update password regularly\n\n\
Still having trouble accessing your account?";

const ACCOUNT_SIGN_UP: &str = "📝 Welcome to EasyFly! Creating your account:\n\n\
**Account Benefits:**\n\
• Track all your flights in one place\n\
• Real-time baggage tracking\n\
• Instant travel notifications\n\
• Digital boarding passes\n\
• Travel history and preferences\n\n\
**Sign Up Process:**\n\
1. Click 'Sign Up' on the main page\n\
2. Enter your personal information\n\
3. Create a secure password\n\
4. Verify your email address\n\
5. Set up your travel preferences\n\n\
**What You'll Need:**\n\
• Valid email address\n\
• Phone number for notifications\n\
• Basic personal information\n\n\
Ready to start your smart travel journey?";

const ACCOUNT: &str = "👤 Account management help for EasyFly:\n\n\
**Account Features:**\n\
• Manage your travel profile\n\
• Update contact information\n\
• Set notification preferences\n\
• View travel history\n\
• Manage family member accounts\n\n\
**Profile Settings:**\n\
• Personal information updates\n\
• Travel preferences\n\
• Notification settings\n\
• Privacy controls\n\n\
**Security Options:**\n\
• Password management\n\
• Two-factor authentication\n\
• Login activity monitoring\n\n\
What specific account help do you need?";

const FEATURES: &str = "🚀 EasyFly Features Overview:\n\n\
**✈️ Flight Management:**\n\
• Digital boarding passes with QR codes\n\
• Real-time flight status updates\n\
• Gate and seat information\n\
• Check-in reminders\n\n\
**🧳 Baggage Tracking:**\n\
• Live luggage location updates\n\
• Pickup notifications\n\
• Carousel information\n\
• Lost baggage assistance\n\n\
**🔔 Smart Notifications:**\n\
• Flight delays and gate changes\n\
• Baggage arrival alerts\n\
• Check-in reminders\n\
• Travel updates\n\n\
**👤 Account Management:**\n\
• Travel profile and preferences\n\
• Family member management\n\
• Travel history\n\
• Security settings\n\n\
Which feature would you like to learn more about?";

const TRAVEL: &str = "🌍 Travel assistance with EasyFly:\n\n\
**Pre-Travel Checklist:**\n\
• Check passport expiration (6+ months validity)\n\
• Verify visa requirements for destination\n\
• Review airline baggage policies\n\
• Download EasyFly app for travel management\n\n\
**Airport Navigation:**\n\
• Arrive 2-3 hours early for international flights\n\
• Check-in online to save time\n\
• Know your terminal and gate information\n\
• Keep important documents accessible\n\n\
**EasyFly Travel Tools:**\n\
• Digital boarding passes\n\
• Real-time flight updates\n\
• Baggage tracking\n\
• Travel notifications\n\n\
**Travel Tips:**\n\
• Pack essentials in carry-on\n\
• Stay hydrated during flights\n\
• Keep copies of important documents\n\n\
What specific travel help do you need?";

const HELP: &str =
    "🆘 I'm here to help! Here are the most common topics I assist with:\n\n\
**✈️ Flight Support**\n\
• Flight status and delays\n\
• Boarding passes and check-in\n\
• Gate changes and cancellations\n\n\
**🧳 Baggage Support**\n\
• Real-time luggage tracking\n\
• Lost or delayed baggage\n\
• Pickup notifications\n\n\
**📱 App Support**\n\
• Account management\n\
• Notification settings\n\
• Technical issues\n\n\
**🌍 Travel Support**\n\
• Airport navigation\n\
• Travel documentation\n\
• General travel tips\n\n\
**📞 Additional Support**\n\
• Contact our support team for complex issues\n\
• Visit our help center for detailed guides\n\n\
What specific area do you need help with?";

const THANKS: &str = "You're very welcome! 😊 I'm always happy to help make your travel experience smoother.\n\n\
Remember, I'm here 24/7 to assist with:\n\
• Flight information and updates\n\
• Baggage tracking and support\n\
• Account and app assistance\n\
• General travel guidance\n\n\
Have a wonderful trip, and feel free to ask me anything else!";

const UNKNOWN: &str = "🤔 I want to make sure I give you the most helpful response! Could you tell me more about what you're looking for?\n\n\
I'm great at helping with:\n\
• **Flight management** - status updates, boarding passes, delays\n\
• **Baggage tracking** - location updates, pickup notifications\n\
• **Travel notifications** - alerts, gate changes, reminders\n\
• **Account support** - login issues, profile management\n\
• **General travel** - airport tips, documentation, planning\n\n\
Try asking something like:\n\
• 'Where is my luggage?'\n\
• 'Is my flight delayed?'\n\
• 'How do I check in?'\n\
• 'Show me app features'\n\
• 'Help with lost baggage'\n\n\
What can I help you with today?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_detail_falls_back() {
        assert_eq!(template_for(Topic::Flight, Some(Detail::Lost)), FLIGHT);
        assert_eq!(template_for(Topic::Travel, Some(Detail::Delay)), TRAVEL);
    }

    #[test]
    fn test_templates_are_multiline() {
        for text in [GREETING, FLIGHT, LUGGAGE, ACCOUNT, FEATURES, TRAVEL, HELP, THANKS, UNKNOWN] {
            assert!(text.lines().count() > 3, "short template: {text}");
        }
    }
}
