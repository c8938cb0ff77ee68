//! Global CSS for the Valentine proposal.
//!
//! One stylesheet injected by the root component. Soft blush gradients,
//! rounded cards, and the full keyframe set driving the decoration
//! layers; everything stateful stays in the components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BLUSH (Backgrounds) */
  --blush-light: #fce7f3;
  --blush-paper: #fff1f2;
  --blush-deep: #fee2e2;

  /* PINK / RED / ROSE (Accents) */
  --pink: #ec4899;
  --red: #ef4444;
  --rose: #f43f5e;
  --pink-soft: #f9a8d4;
  --pink-bright: #f472b6;

  /* TEXT */
  --ink: #374151;
  --ink-soft: #6b7280;
  --pink-text: #db2777;
  --pink-deep: #be185d;

  /* NIGHT (Gallery panel) */
  --night: #0f172a;
  --night-plum: #2e1065;

  /* Typography */
  --font-round: 'Nunito', 'Segoe UI', system-ui, sans-serif;
  --font-serif: 'Georgia', 'Times New Roman', serif;
}

/* === Reset === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html, body {
  height: 100%;
  overflow-x: hidden;
}

body {
  font-family: var(--font-round);
  color: var(--ink);
}

button {
  font-family: inherit;
  border: none;
  background: none;
  cursor: pointer;
}

/* === App Shell === */
.app-shell {
  min-height: 100vh;
  width: 100%;
  position: relative;
  overflow-x: hidden;
  background: linear-gradient(135deg, var(--blush-light), var(--blush-paper), var(--blush-deep));
}

.app-content {
  position: relative;
  z-index: 10;
}

/* Ambient background blobs */
.ambient-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  overflow: hidden;
}

.blob {
  position: absolute;
  border-radius: 50%;
  filter: blur(64px);
  animation: pulse 4s ease-in-out infinite;
}

.blob-top {
  top: 2.5rem;
  left: 2.5rem;
  width: 18rem;
  height: 18rem;
  background: rgba(249, 168, 212, 0.2);
}

.blob-bottom {
  bottom: 5rem;
  right: 5rem;
  width: 20rem;
  height: 20rem;
  background: rgba(253, 164, 175, 0.2);
  animation-delay: 1.5s;
}

.blob-center {
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  width: 24rem;
  height: 24rem;
  background: rgba(254, 202, 202, 0.15);
  animation-delay: 3s;
}

/* === Floating Hearts (decoration layer) === */
.floating-hearts {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.floating-heart {
  position: absolute;
  bottom: -40px;
  user-select: none;
  animation-name: float-up;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

/* === Entrance transitions === */
.entrance {
  opacity: 0;
  transform: translateY(2rem);
  transition: all 1s ease-out;
}

.entrance.revealed {
  opacity: 1;
  transform: translateY(0);
}

.entrance-scale {
  opacity: 0;
  transform: scale(0);
  transition: all 0.7s ease-out;
}

.entrance-scale.revealed {
  opacity: 1;
  transform: scale(1);
}

.delay-200 { transition-delay: 200ms; }
.delay-300 { transition-delay: 300ms; }
.delay-400 { transition-delay: 400ms; }
.delay-500 { transition-delay: 500ms; }

/* === Ask Page === */
.ask-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  width: 100%;
  padding: 3rem 1.5rem;
  position: relative;
}

.mascot-wrap {
  transition-duration: 0.7s;
}

.mascot-inner {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
}

.mascot {
  font-size: 100px;
  user-select: none;
  line-height: 1;
}

.thought-bubble {
  position: absolute;
  top: -3rem;
  right: -5rem;
  background: white;
  border: 2px solid var(--blush-light);
  border-radius: 1rem;
  padding: 0.4rem 1rem;
  box-shadow: 0 8px 24px rgba(236, 72, 153, 0.15);
  z-index: 20;
  white-space: nowrap;
}

.thought-bubble p {
  font-size: 0.9rem;
  font-weight: 600;
  color: var(--pink-text);
}

.thought-tail {
  position: absolute;
  bottom: -7px;
  left: 1.25rem;
  width: 12px;
  height: 12px;
  background: white;
  border-right: 2px solid var(--blush-light);
  border-bottom: 2px solid var(--blush-light);
  transform: rotate(45deg);
}

.headline {
  text-align: center;
  line-height: 1.15;
  margin-top: 1.5rem;
}

.headline-line {
  display: block;
  font-size: clamp(2rem, 7vw, 4rem);
  font-weight: 800;
  background: linear-gradient(90deg, var(--pink), var(--red), var(--rose));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.headline-line.alt {
  background: linear-gradient(90deg, var(--rose), var(--pink-text), var(--red));
  -webkit-background-clip: text;
  background-clip: text;
  margin-top: 0.25rem;
}

.subtitle {
  margin-top: 1.25rem;
  color: var(--pink-bright);
  font-size: 1.1rem;
  text-align: center;
  max-width: 28rem;
}

.button-row {
  margin-top: 2.5rem;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: 2rem;
}

.yes-button {
  border-radius: 9999px;
  font-weight: 700;
  color: white;
  background: linear-gradient(90deg, var(--pink), var(--red), var(--rose));
  box-shadow: 0 20px 40px rgba(244, 114, 182, 0.4);
  transition: transform 0.3s ease-out, box-shadow 0.3s ease-out, filter 0.3s;
  z-index: 10;
}

.yes-button:hover {
  filter: brightness(1.1);
  box-shadow: 0 24px 48px rgba(236, 72, 153, 0.5);
}

.yes-button:active {
  filter: brightness(0.95);
}

.no-button {
  border-radius: 9999px;
  font-weight: 600;
  color: var(--ink-soft);
  background: white;
  border: 2px solid #e5e7eb;
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.08);
  user-select: none;
}

.no-button.inline {
  padding: 0.75rem 2rem;
  transition: border-color 0.3s ease-out;
  z-index: 10;
}

.no-button.inline:hover {
  border-color: #d1d5db;
}

.no-button.floating {
  position: fixed;
  padding: 0.65rem 1.8rem;
  z-index: 50;
  transition:
    left 0.35s cubic-bezier(0.34, 1.56, 0.64, 1),
    top 0.35s cubic-bezier(0.34, 1.56, 0.64, 1),
    font-size 0.3s,
    opacity 0.3s;
}

.evade-tally {
  margin-top: 2.5rem;
  text-align: center;
}

.tally-line {
  color: rgba(244, 114, 182, 0.8);
  font-size: 0.9rem;
}

.tally-count {
  font-weight: 700;
  color: #f87171;
}

.tally-hearts {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.25rem;
  margin-top: 0.5rem;
}

.tally-heart {
  font-size: 0.9rem;
  display: inline-block;
}

.ask-footer {
  position: absolute;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.75rem;
  opacity: 0.3;
}

.footer-emoji {
  font-size: 1.5rem;
  display: inline-block;
}

/* === Celebration Page === */
.celebration-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 100vh;
  width: 100%;
  padding: 3rem 1.5rem 2rem;
}

.confetti-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 30;
  overflow: hidden;
}

.confetti-piece {
  position: absolute;
  top: -60px;
  animation-name: confetti-fall;
  animation-timing-function: linear;
  animation-iteration-count: infinite;
}

.celebrate-burst {
  margin-bottom: 1rem;
}

.celebrate-emoji {
  font-size: 5rem;
  user-select: none;
  line-height: 1;
  animation: celebrate 1s ease-in-out infinite;
}

.celebrate-title {
  text-align: center;
}

.celebrate-title h1 {
  font-size: clamp(2.5rem, 8vw, 4.5rem);
  font-weight: 900;
  line-height: 1.1;
}

.gradient-text {
  background: linear-gradient(90deg, var(--pink), var(--red), var(--rose), var(--pink));
  background-size: 300% 100%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gradient-shift 3s linear infinite;
}

.celebrate-sub {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--pink-text);
  margin-top: 0.5rem;
}

.celebrate-card {
  width: 100%;
  max-width: 28rem;
  margin-top: 2rem;
  transition-duration: 0.7s;
}

.card-inner {
  background: rgba(255, 255, 255, 0.7);
  backdrop-filter: blur(24px);
  border: 1px solid rgba(251, 207, 232, 0.5);
  border-radius: 1.5rem;
  box-shadow: 0 25px 50px rgba(249, 168, 212, 0.25);
  padding: 2rem;
  overflow: hidden;
}

.card-heart {
  display: flex;
  justify-content: center;
  font-size: 3.5rem;
  margin-bottom: 1.25rem;
  line-height: 1;
}

.card-heading {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  color: var(--pink-text);
  margin-bottom: 1.25rem;
}

.love-note {
  background: rgba(253, 242, 248, 0.8);
  border: 1px solid rgba(251, 207, 232, 0.5);
  border-radius: 1rem;
  padding: 1.25rem;
  margin-bottom: 1.25rem;
}

.love-note p {
  color: var(--pink-deep);
  text-align: center;
  font-size: 1rem;
  line-height: 1.6;
  font-weight: 500;
}

.card-divider {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
}

.divider-line {
  flex: 1;
  height: 1px;
  background: linear-gradient(90deg, transparent, var(--pink-soft), transparent);
}

.divider-heart {
  color: var(--pink-bright);
  font-size: 0.9rem;
}

.message-block {
  transition-duration: 0.7s;
}

.message-card {
  background: linear-gradient(90deg, #fdf2f8, #fff1f2);
  border: 1px solid rgba(251, 207, 232, 0.4);
  border-radius: 1rem;
  padding: 1.25rem;
  margin-bottom: 1.25rem;
  min-height: 70px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.sweet-message {
  color: var(--pink-text);
  text-align: center;
  font-size: 1rem;
  font-weight: 500;
}

.love-counter {
  text-align: center;
  margin-bottom: 1.25rem;
}

.counter-label {
  color: var(--pink-bright);
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.counter-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.counter-value {
  font-size: 2.25rem;
  font-weight: 900;
  line-height: 1;
}

.counter-heart {
  font-size: 1.25rem;
  display: inline-block;
}

.counter-caption {
  color: rgba(244, 114, 182, 0.6);
  font-size: 0.7rem;
  margin-top: 0.25rem;
}

.promise-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
  margin-bottom: 1.25rem;
}

.promise-card {
  background: rgba(255, 255, 255, 0.8);
  border: 1px solid #fce7f3;
  border-radius: 0.75rem;
  padding: 0.75rem;
  text-align: center;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.04);
  transition: all 0.3s;
  cursor: default;
}

.promise-card:hover {
  transform: scale(1.05);
  border-color: var(--pink-soft);
  box-shadow: 0 8px 16px rgba(249, 168, 212, 0.25);
}

.promise-emoji {
  font-size: 1.5rem;
  display: block;
  margin-bottom: 0.25rem;
  line-height: 1;
}

.promise-label {
  color: var(--pink);
  font-size: 0.85rem;
  font-weight: 500;
}

.open-letter-button,
.open-gallery-button {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  color: white;
  font-weight: 700;
  font-size: 1.05rem;
  padding: 0.9rem 1.5rem;
  border-radius: 0.75rem;
  box-shadow: 0 10px 24px rgba(244, 114, 182, 0.35);
  transition: all 0.3s;
  margin-bottom: 1.25rem;
}

.open-letter-button {
  background: linear-gradient(90deg, #fb7185, var(--pink-bright));
}

.open-gallery-button {
  background: linear-gradient(90deg, var(--pink-bright), #a78bfa);
}

.open-letter-button:hover,
.open-gallery-button:hover {
  transform: scale(1.05);
  box-shadow: 0 14px 32px rgba(236, 72, 153, 0.4);
}

.coupon {
  position: relative;
  background: linear-gradient(90deg, var(--red), var(--pink));
  border-radius: 1rem;
  padding: 1.25rem;
  color: white;
  text-align: center;
  overflow: hidden;
}

.coupon-label {
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  opacity: 0.8;
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.coupon-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.coupon-sub {
  font-size: 0.85rem;
  opacity: 0.9;
}

.coupon-stars {
  display: flex;
  justify-content: center;
  gap: 0.25rem;
  margin-top: 0.5rem;
  color: #fde047;
  font-size: 0.75rem;
}

.coupon-notch {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 0.75rem;
  height: 1.5rem;
  background: var(--blush-light);
}

.coupon-notch.left {
  left: 0;
  border-radius: 0 9999px 9999px 0;
}

.coupon-notch.right {
  right: 0;
  border-radius: 9999px 0 0 9999px;
}

.celebrate-footer {
  display: flex;
  gap: 0.75rem;
  margin-top: 2rem;
  animation-delay: 2s;
}

.celebrate-footer .footer-emoji {
  font-size: 1.75rem;
}

.made-with {
  margin-top: 1rem;
  color: rgba(244, 114, 182, 0.5);
  font-size: 0.85rem;
  text-align: center;
  padding-bottom: 2rem;
}

/* === Letter Modal === */
.letter-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(190, 24, 93, 0.15);
  backdrop-filter: blur(4px);
  opacity: 1;
  transition: opacity 0.3s;
}

.letter-overlay.closing {
  opacity: 0;
  pointer-events: none;
}

.letter-panel {
  position: relative;
  width: 100%;
  max-width: 42rem;
  background: linear-gradient(135deg, var(--blush-light), var(--blush-paper), var(--blush-light));
  border: 2px solid rgba(251, 207, 232, 0.5);
  border-radius: 1.5rem;
  box-shadow: 0 25px 60px rgba(190, 24, 93, 0.3);
  overflow: hidden;
  transform: scale(1);
  opacity: 1;
  transition: all 0.3s;
}

.letter-panel.closing {
  transform: scale(0.95);
  opacity: 0;
}

.letter-corner {
  position: absolute;
  font-size: 2.25rem;
  opacity: 0.3;
  pointer-events: none;
  z-index: 5;
}

.letter-corner.top-left { top: 0.5rem; left: 0.5rem; }
.letter-corner.bottom-right { bottom: 0.5rem; right: 0.5rem; }

.letter-header {
  position: relative;
  height: 6rem;
  background: linear-gradient(90deg, #fb7185, var(--pink-bright), #fb7185);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
}

.letter-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.75rem;
  font-weight: 900;
  color: white;
}

.letter-title .bounce {
  font-size: 2rem;
}

.letter-close {
  color: white;
  font-size: 1.5rem;
  line-height: 1;
  transition: transform 0.2s;
}

.letter-close:hover {
  transform: scale(1.25) rotate(90deg);
}

.letter-body {
  position: relative;
  height: 24rem;
  overflow-y: auto;
  padding: 2rem;
}

.trail-heart {
  position: absolute;
  pointer-events: none;
  font-size: 1.5rem;
  z-index: 40;
  animation: trail-float 0.8s ease-out forwards;
}

.letter-text {
  color: var(--ink);
  font-family: var(--font-serif);
  font-size: 1.1rem;
  line-height: 1.7;
}

.letter-text p {
  margin-bottom: 1rem;
}

.scroll-hint {
  position: absolute;
  bottom: 5rem;
  left: 0;
  right: 0;
  height: 4rem;
  background: linear-gradient(0deg, var(--blush-light), rgba(252, 231, 243, 0.5), transparent);
  display: flex;
  align-items: flex-end;
  justify-content: center;
  gap: 0.25rem;
  padding-bottom: 0.75rem;
  pointer-events: none;
  font-size: 0.9rem;
}

.scroll-hint-text {
  color: var(--pink);
  font-weight: 600;
}

.letter-footer {
  background: linear-gradient(90deg, var(--blush-light), var(--blush-paper));
  border-top: 2px solid rgba(251, 207, 232, 0.5);
  padding: 1rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.letter-footer .bounce {
  font-size: 1.5rem;
}

.letter-close-button {
  background: linear-gradient(90deg, var(--rose), var(--pink));
  color: white;
  font-weight: 700;
  font-size: 0.95rem;
  padding: 0.65rem 2rem;
  border-radius: 9999px;
  box-shadow: 0 10px 24px rgba(244, 63, 94, 0.35);
  transition: all 0.3s;
}

.letter-close-button:hover {
  transform: scale(1.1);
  box-shadow: 0 14px 32px rgba(244, 63, 94, 0.45);
}

/* === Gallery Modal === */
.gallery-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0);
  transition: all 0.5s;
}

.gallery-overlay.visible {
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(16px);
}

.burst-layer {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
}

.burst-slip {
  position: absolute;
  top: 0;
  z-index: 50;
  animation-name: confetti-fall;
  animation-timing-function: linear;
}

.burst-slip-inner {
  width: 0.5rem;
  height: 0.75rem;
  border-radius: 0.125rem;
}

.gallery-panel {
  position: relative;
  margin: 0 1rem;
  width: 100%;
  max-width: 56rem;
  border-radius: 1.85rem;
  background: linear-gradient(135deg, var(--night), var(--night-plum), var(--night));
  box-shadow: 0 0 0 3px rgba(236, 72, 153, 0.6), 0 30px 80px rgba(0, 0, 0, 0.5);
  overflow: hidden;
  transform: translateY(100%) scale(0.5);
  opacity: 0;
  transition: all 0.5s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.gallery-panel.visible {
  transform: translateY(0) scale(1);
  opacity: 1;
}

.panel-drift {
  position: absolute;
  bottom: -30px;
  pointer-events: none;
  user-select: none;
  font-size: 1.1rem;
  animation: float-up 6s linear infinite;
}

.twinkle-star {
  position: absolute;
  pointer-events: none;
  color: #fde047;
  font-size: 0.8rem;
  animation: twinkle 2s ease-in-out infinite;
}

.gallery-header {
  position: relative;
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
  padding: 1.25rem 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.gallery-title-group {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.gallery-logo {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3.5rem;
  height: 3.5rem;
  border-radius: 1rem;
  background: linear-gradient(135deg, var(--pink), #9333ea);
  font-size: 1.5rem;
  box-shadow: 0 10px 24px rgba(236, 72, 153, 0.3);
}

.gallery-title {
  font-size: 1.75rem;
  font-weight: 800;
  background: linear-gradient(90deg, #f9a8d4, #d8b4fe, #67e8f9, #f9a8d4);
  background-size: 300% 100%;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: gradient-shift 4s linear infinite;
}

.gallery-subtitle {
  margin-top: 0.1rem;
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 0.85rem;
  color: rgba(216, 180, 254, 0.7);
}

.wave {
  display: inline-block;
  animation: wave 1.5s ease-in-out infinite;
  transform-origin: 70% 70%;
}

.gallery-close {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.75rem;
  height: 2.75rem;
  border-radius: 1rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  background: rgba(255, 255, 255, 0.05);
  color: rgba(255, 255, 255, 0.5);
  font-size: 1.1rem;
  transition: all 0.3s;
}

.gallery-close:hover {
  border-color: rgba(236, 72, 153, 0.5);
  background: rgba(236, 72, 153, 0.2);
  color: #f9a8d4;
  transform: rotate(90deg);
}

.gallery-grid {
  max-height: 55vh;
  overflow-y: auto;
  padding: 1.5rem;
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.25rem;
}

@media (max-width: 640px) {
  .gallery-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

.image-card {
  position: relative;
  cursor: pointer;
}

.image-card.waiting {
  opacity: 0;
}

.image-card.entering {
  animation: card-enter 0.5s ease-out both;
}

.card-glow {
  position: absolute;
  inset: -6px;
  border-radius: 1rem;
  filter: blur(12px);
  opacity: 0;
  transition: opacity 0.5s;
}

.card-glow.glowing {
  opacity: 0.8;
}

.card-frame {
  position: relative;
  overflow: hidden;
  border-radius: 1rem;
  border: 3px solid transparent;
  background: white;
  box-shadow: 0 10px 24px rgba(0, 0, 0, 0.3);
  transition: all 0.3s;
}

.image-card:hover .card-frame {
  box-shadow: 0 20px 48px rgba(0, 0, 0, 0.45);
}

.card-image {
  aspect-ratio: 1 / 1;
  width: 100%;
  object-fit: cover;
  display: block;
  transition: all 0.7s;
}

.image-card:hover .card-image {
  transform: scale(1.1);
  filter: brightness(1.1) saturate(1.1);
}

.card-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  transform: translateY(100%);
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.5), transparent);
  padding: 2rem 0.75rem 0.75rem;
  transition: transform 0.3s;
}

.card-caption.shown {
  transform: translateY(0);
}

.card-caption p {
  text-align: center;
  font-size: 0.85rem;
  font-weight: 600;
  color: white;
  text-shadow: 0 2px 8px rgba(0, 0, 0, 0.6);
}

.card-badge {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.9);
  font-size: 1.1rem;
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.25);
  backdrop-filter: blur(4px);
}

.heart-pop {
  position: absolute;
  left: 0.5rem;
  bottom: 0.5rem;
  font-size: 1.5rem;
  pointer-events: none;
  animation: sparkle-pop 0.5s ease-out both;
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0);
  transition: all 0.4s;
}

.lightbox.visible {
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(16px);
}

.lightbox-content {
  position: relative;
  max-height: 85vh;
  max-width: 42rem;
  transform: scale(0) rotate(45deg);
  opacity: 0;
  transition: all 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
}

.lightbox.visible .lightbox-content {
  transform: scale(1) rotate(0);
  opacity: 1;
}

.lightbox-glow {
  position: absolute;
  inset: -1rem;
  border-radius: 1.5rem;
  opacity: 0.6;
  filter: blur(32px);
}

.lightbox-frame {
  position: relative;
  overflow: hidden;
  border-radius: 1.5rem;
  border: 4px solid rgba(255, 255, 255, 0.4);
  box-shadow: 0 30px 80px rgba(0, 0, 0, 0.6);
}

.lightbox-image {
  max-height: 75vh;
  width: 100%;
  object-fit: contain;
  display: block;
}

.lightbox-info {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
  padding: 4rem 1.5rem 1.5rem;
}

.lightbox-caption-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
}

.lightbox-emoji {
  font-size: 1.75rem;
}

.lightbox-caption {
  font-size: 1.25rem;
  font-weight: 700;
  color: white;
  text-shadow: 0 2px 8px rgba(0, 0, 0, 0.6);
}

.lightbox-sparkles {
  display: flex;
  justify-content: center;
  gap: 0.25rem;
  margin-top: 0.5rem;
  font-size: 0.85rem;
}

.lightbox-close,
.lightbox-like {
  position: absolute;
  top: -0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  box-shadow: 0 10px 24px rgba(0, 0, 0, 0.4);
  transition: all 0.3s;
}

.lightbox-close {
  right: -0.75rem;
  background: linear-gradient(90deg, var(--pink), #a855f7);
  color: white;
  font-weight: 700;
  font-size: 1.1rem;
}

.lightbox-close:hover {
  transform: scale(1.25) rotate(180deg);
}

.lightbox-like {
  left: -0.75rem;
  background: white;
  font-size: 1.25rem;
}

.lightbox-like:hover {
  transform: scale(1.25);
}

.lightbox-like:active {
  transform: scale(0.9);
}

/* === Shared animation helpers === */
.bounce-slow {
  animation: bounce-slow 3s ease-in-out infinite;
}

.bounce {
  display: inline-block;
  animation: bounce 1s ease-in-out infinite;
}

.bounce.delayed {
  animation-delay: 0.2s;
}

.pulse {
  animation: pulse 2s ease-in-out infinite;
}

.heartbeat {
  display: inline-block;
  animation: heartbeat 1.2s ease-in-out infinite;
}

.fade-in {
  animation: fade-in 0.6s ease-out both;
}

.twinkle {
  display: inline-block;
  animation: twinkle 2s ease-in-out infinite;
}

/* === Keyframes === */
@keyframes float-up {
  from {
    transform: translateY(0);
  }
  to {
    transform: translateY(-110vh);
  }
}

@keyframes confetti-fall {
  from {
    transform: translateY(-60px) rotate(0deg);
  }
  to {
    transform: translateY(110vh) rotate(360deg);
  }
}

@keyframes fade-in {
  from {
    opacity: 0;
    transform: translateY(0.5rem);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes bounce-slow {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-25%); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  15% { transform: scale(1.2); }
  30% { transform: scale(1); }
  45% { transform: scale(1.15); }
  60% { transform: scale(1); }
}

@keyframes celebrate {
  0%, 100% { transform: rotate(-8deg) scale(1); }
  50% { transform: rotate(8deg) scale(1.1); }
}

@keyframes gradient-shift {
  from { background-position: 0% 50%; }
  to { background-position: 300% 50%; }
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; transform: scale(0.8); }
  50% { opacity: 1; transform: scale(1.2); }
}

@keyframes card-enter {
  from {
    opacity: 0;
    transform: translateY(2rem) scale(0.8);
  }
  to {
    opacity: 1;
    transform: translateY(0) scale(1);
  }
}

@keyframes trail-float {
  from {
    opacity: 1;
    transform: translateY(0) scale(1);
  }
  to {
    opacity: 0;
    transform: translateY(-48px) scale(1.3);
  }
}

@keyframes sparkle-pop {
  0% { transform: scale(0); opacity: 0; }
  60% { transform: scale(1.3); opacity: 1; }
  100% { transform: scale(1); opacity: 1; }
}

@keyframes wave {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(20deg); }
  75% { transform: rotate(-10deg); }
}
"#;
