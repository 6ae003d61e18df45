pub mod get_donation_candidates;
