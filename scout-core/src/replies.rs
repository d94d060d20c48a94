//! Fixed reply texts shown to chat users

pub const WELCOME: &str = "🤖 Instagram Profile Info Bot\n\n\
Send me any Instagram profile link and I'll fetch public information including contact details from bio.\n\n\
📋 What I can show:\n\
• Profile info (followers, posts, bio)\n\
• Contact details from bio (email, phone, social)\n\
• Website contact extraction\n\n\
Example: https://www.instagram.com/username/\n\n\
⚠️ Note: Only works for public profiles with publicly shared contact info";

pub const HELP: &str = "📖 How to use:\n\
1. Send any Instagram profile URL\n\
2. I'll extract the public information\n\
3. Get details + contact info from bio\n\n\
Supported formats:\n\
• https://www.instagram.com/username/\n\
• https://instagram.com/username\n\
• @username\n\
• username\n\n\
What I extract:\n\
• Profile information\n\
• Email/phone from bio\n\
• Social media handles\n\
• Website contacts";

pub const INVALID_INPUT: &str = "❌ Invalid Instagram URL or username.\n\
Please send a valid Instagram profile link.\n\n\
Examples:\n\
• https://www.instagram.com/username/\n\
• @username\n\
• username";

pub const FETCH_FAILED: &str = "❌ Could not fetch profile information.\n\n\
Possible reasons:\n\
• Profile doesn't exist\n\
• Instagram rate limiting\n\
• Network issues\n\
• Profile is private\n\n\
Please try again later or check the username.";

pub const PRIVATE_PROFILE: &str = "🔒 This profile is private.\n\n\
I can only access public profile information. \
Please make sure the profile is public or try another account.";

pub const GENERIC_ERROR: &str = "❌ An error occurred while fetching profile information.\n\
Please try again later.";

pub const NO_CONTACTS: &str = "❌ No contact information found in bio or linked website.\n\
Contact details are only available if the user shares them publicly.";
