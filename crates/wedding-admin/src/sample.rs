//! Built-in page used by `update` and `setup` when no file is given.

pub const SAMPLE_CONTENT: &str = r#"
<div class="content-section">
    <h2>Ceremony Details</h2>
    <p><strong>Date:</strong> June 15, 2024</p>
    <p><strong>Time:</strong> 4:00 PM</p>
    <p><strong>Location:</strong> Sunlight Gardens</p>
    <p><strong>Address:</strong> 123 Main Street, Your City, State 12345</p>
    <p><strong>Dress Code:</strong> Semi-formal</p>
</div>

<div class="content-section">
    <h2>Reception</h2>
    <p><strong>Time:</strong> 6:00 PM - 11:00 PM</p>
    <p><strong>Location:</strong> Same Venue - Garden Pavilion</p>
    <p><strong>Dinner:</strong> Plated dinner will be served at 7:00 PM</p>
    <p><strong>Dancing:</strong> DJ and dancing from 8:00 PM onwards</p>
</div>

<div class="content-section">
    <h2>RSVP Information</h2>
    <p><strong>RSVP Deadline:</strong> May 15, 2024</p>
    <p><strong>Contact:</strong> rsvp@example.com</p>
    <p><strong>Phone:</strong> (555) 123-4567</p>
    <p>Please let us know about any dietary restrictions or special accommodations needed.</p>
</div>

<div class="content-section">
    <h2>Accommodations</h2>
    <p><strong>Recommended Hotels:</strong></p>
    <p>• Garden Inn &amp; Suites - (555) 234-5678</p>
    <p>• Downtown Hotel - (555) 345-6789</p>
    <p>Special wedding rates available, mention the wedding when booking.</p>
</div>

<div class="content-section">
    <h2>Transportation</h2>
    <p>Complimentary shuttle service will be provided from recommended hotels to the venue.</p>
    <p>Pickup times: 3:30 PM and return service at 11:30 PM</p>
</div>

<div class="content-section">
    <h2>Gift Registry</h2>
    <p>Your presence is the greatest gift! If you wish to give a gift, we are registered at:</p>
    <p>• Target</p>
    <p>• Williams Sonoma</p>
    <p>• Honeymoon fund</p>
</div>
"#;
