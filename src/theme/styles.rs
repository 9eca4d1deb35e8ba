//! Global CSS styles for the Valentine greeting.
//!
//! Layout, palette and every animation on the page. Animations are plain
//! keyframes; components opt in through class names.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINK (Hearts, Buttons) */
  --pink: #ec4899;
  --pink-hot: #ff69b4;
  --pink-pale: #fbcfe8;
  --pink-soft: #f472b6;

  /* PURPLE */
  --purple: #9333ea;

  /* NIGHT */
  --midnight: #0a192f;
  --midnight-lighter: #112240;

  /* STARLIGHT */
  --star-yellow: #fef08a;
  --moon-yellow: #fef9c3;

  /* TEXT */
  --text-light: #ffffff;
  --text-ink: #1f2937;

  /* Typography */
  --font-hand: 'Dancing Script', 'Segoe Script', 'Brush Script MT', cursive;
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Hug meter, set inline by the section */
  --hug-scale: 1;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  color: var(--text-light);
  -webkit-font-smoothing: antialiased;
}

.font-handwriting {
  font-family: var(--font-hand);
}

/* === Snap Container === */
.greeting {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-snap-type: y mandatory;
}

.snap-section {
  position: relative;
  height: 100vh;
  overflow: hidden;
  scroll-snap-align: start;
}

.backdrop {
  position: absolute;
  inset: 0;
  background-size: cover;
  background-position: center;
}

/* === Proposal === */
.proposal-tint {
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, rgba(236, 72, 153, 0.5), transparent);
}

.proposal-content {
  position: relative;
  z-index: 10;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: flex-start;
  padding-left: 20rem;
}

.proposal-card {
  max-width: 36rem;
}

.proposal-gif {
  width: 16rem;
  height: 16rem;
  object-fit: cover;
  border-radius: 9999px;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
  margin-bottom: 2rem;
}

.proposal-question {
  font-size: 2.25rem;
  margin-bottom: 2rem;
}

.proposal-actions {
  display: flex;
  gap: 1rem;
}

.proposal-answer {
  text-align: center;
  font-size: 2.25rem;
  margin-top: 1rem;
}

/* === Buttons === */
.btn-valentine {
  padding: 0.75rem 1.5rem;
  background: var(--pink);
  color: var(--text-light);
  border: none;
  border-radius: 9999px;
  font-weight: 600;
  font-size: 1rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
  transition: transform 150ms ease;
}

.btn-valentine:hover {
  transform: scale(1.1);
}

.btn-ghost {
  padding: 0.75rem 1.5rem;
  background: transparent;
  color: var(--text-light);
  border: 1px solid var(--text-light);
  border-radius: 9999px;
  transition: transform 150ms ease;
}

.btn-ghost:hover {
  transform: scale(1.1);
}

/* === Star Map === */
.star-map {
  background: linear-gradient(to bottom, var(--midnight), var(--midnight-lighter));
}

.star-map-header {
  position: absolute;
  top: 2rem;
  left: 50%;
  transform: translateX(-50%);
  text-align: center;
  z-index: 10;
  animation: drop-in 600ms ease-out both;
}

.star-map-title {
  font-size: 1.875rem;
  margin-bottom: 0.5rem;
}

.star-map-hint {
  color: var(--pink-pale);
  font-size: 0.875rem;
}

.twinkling-sky {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.twinkle {
  position: absolute;
  width: 0.25rem;
  height: 0.25rem;
  background: var(--text-light);
  border-radius: 9999px;
  animation-name: twinkle;
  animation-iteration-count: infinite;
  animation-timing-function: ease-in-out;
}

.nickname-star {
  position: absolute;
  color: var(--star-yellow);
}

.nickname-star .pulse {
  animation-delay: var(--star-delay, 0s);
}

.moon {
  position: absolute;
  right: 2.5rem;
  top: 5rem;
  color: var(--moon-yellow);
  transition: transform 200ms ease;
}

.moon:hover {
  transform: scale(1.1);
}

/* === Heart Messages === */
.heart-message {
  position: fixed;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  z-index: 50;
  pointer-events: none;
}

.heart-message-inner {
  position: relative;
}

.heart-message-text {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 0 2rem;
}

.heart-message-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.heart-message-body {
  font-size: 0.875rem;
}

.heart-message.large .heart-message-text {
  padding: 0 3rem;
}

.heart-message.large .heart-message-title {
  font-size: 1.5rem;
  margin-bottom: 0.5rem;
}

.heart-message.large .heart-message-body {
  font-size: 1.125rem;
}

/* === Love Letter === */
.letter-section {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.letter-section .backdrop {
  background-attachment: fixed;
}

.letter-paper {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 42rem;
  padding: 2rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(4px);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
  color: var(--text-ink);
  font-size: 1.125rem;
  white-space: pre-line;
  animation: float 4s ease-in-out infinite;
}

.letter-typed {
  animation: soft-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

/* === Hug Meter === */
.hug-section {
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(to bottom right, var(--pink-soft), var(--purple));
}

.hug-panel {
  text-align: center;
  padding: 2rem;
}

.hug-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 2rem;
}

.hug-control {
  position: relative;
  width: 20rem;
  margin: 0 auto 2rem;
}

.hug-slider {
  width: 100%;
  height: 0.5rem;
  background: var(--pink-pale);
  border-radius: 0.5rem;
  appearance: none;
  -webkit-appearance: none;
}

.hug-heart {
  margin-top: 1rem;
  display: flex;
  justify-content: center;
  animation: hug-beat 0.5s ease-in-out infinite;
}

.hug-message {
  font-size: 1.5rem;
  margin-top: 2rem;
}

/* === Forever === */
.forever-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: linear-gradient(to bottom, var(--purple), var(--midnight));
  text-align: center;
  padding: 2rem;
}

.forever-title {
  font-size: 3rem;
}

.forever-message {
  max-width: 36rem;
  font-size: 1.25rem;
  color: var(--pink-pale);
}

/* === Animation Classes === */
.pulse {
  animation: pulse 2s ease-in-out infinite;
}

.glow {
  animation: glow 2s ease-in-out infinite;
}

.pop-in {
  animation: pop-in 300ms ease-out both;
}

.appear {
  animation: appear 500ms ease-out both;
}

/* === Keyframes === */
@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 0.85; }
  50% { transform: scale(1.1); opacity: 1; }
}

@keyframes glow {
  0%, 100% { text-shadow: 0 0 5px var(--pink-hot); }
  50% { text-shadow: 0 0 20px var(--pink-hot); }
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; transform: scale(1); }
  50% { opacity: 0.8; transform: scale(1.2); }
}

@keyframes drop-in {
  from { opacity: 0; transform: translate(-50%, -20px); }
  to { opacity: 1; transform: translate(-50%, 0); }
}

@keyframes pop-in {
  from { opacity: 0; transform: translate(-50%, -50%) scale(0.8); }
  to { opacity: 1; transform: translate(-50%, -50%) scale(1); }
}

@keyframes appear {
  from { opacity: 0; transform: scale(0); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}

@keyframes soft-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes hug-beat {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(var(--hug-scale)); }
}
"#;
